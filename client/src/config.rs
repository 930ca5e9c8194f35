use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skirmish_battle::{
    BattleConfig, BattleOptions, BattleStatus, StartPosType, User, start_boxes_for_map,
};

use crate::session::OFFLINE_BATTLE_ID;

/// Client settings, read from a JSON file
///
/// Every field is optional in the file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LobbyConfig {
    /// Route shown after leaving a battle
    pub home_route: String,
    pub engine_version: String,
    pub game_version: String,
    /// Map script name for new offline battles
    pub map: String,
    pub start_pos_type: StartPosType,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            home_route: "/home".to_string(),
            engine_version: "105.1.1-2590-gb9462a0 bar".to_string(),
            game_version: "byar:test".to_string(),
            map: "Red Comet Remake 1.8".to_string(),
            start_pos_type: StartPosType::Boxes,
        }
    }
}

impl LobbyConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid lobby config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lobby config {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Initial state of an offline battle founded by `local_user`
    pub fn offline_battle(&self, local_user: User) -> BattleConfig {
        let mut battle_options = BattleOptions::new(
            &self.engine_version,
            &self.game_version,
            &self.map,
            local_user.user_id,
        );
        battle_options.start_pos_type = self.start_pos_type;
        battle_options.start_boxes = start_boxes_for_map(&self.map).to_vec();

        let founder = User {
            battle_status: BattleStatus {
                battle_id: Some(OFFLINE_BATTLE_ID),
                is_spectator: false,
                team_id: 0,
                player_id: 0,
                ready: true,
            },
            ..local_user
        };

        BattleConfig {
            battle_options,
            bots: Vec::new(),
            users: vec![founder],
        }
    }
}
