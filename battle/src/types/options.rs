//! Battle-wide options

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::participant::UserId;

/// Free-form option map, used for game options and AI options
pub type OptionMap = BTreeMap<String, serde_json::Value>;

/// How starting positions are assigned when the game launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StartPosType {
    /// Map-defined start points in player order
    Fixed,
    /// Map-defined start points, shuffled
    Random,
    /// Players choose a point inside their team's start box
    #[default]
    Boxes,
}

impl StartPosType {
    /// Numeric value written into the game's start script
    pub fn as_index(&self) -> u8 {
        match self {
            StartPosType::Fixed => 0,
            StartPosType::Random => 1,
            StartPosType::Boxes => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(StartPosType::Fixed),
            1 => Some(StartPosType::Random),
            2 => Some(StartPosType::Boxes),
            _ => None,
        }
    }
}

/// Rectangle a team may start in, as fractions of the map size
///
/// Values are not clamped; `0.0..=1.0` is the convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBox {
    pub x_percent: f32,
    pub y_percent: f32,
    pub width_percent: f32,
    pub height_percent: f32,
}

impl StartBox {
    pub const fn new(x_percent: f32, y_percent: f32, width_percent: f32, height_percent: f32) -> Self {
        Self {
            x_percent,
            y_percent,
            width_percent,
            height_percent,
        }
    }
}

/// Configuration shared by every participant of a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOptions {
    pub engine_version: String,
    pub game_version: String,
    /// Map script name
    pub map: String,
    pub founder_id: UserId,
    /// Set once the game has been launched
    pub start_time: Option<DateTime<Utc>>,
    pub start_pos_type: StartPosType,
    /// One box per team, in team order
    pub start_boxes: Vec<StartBox>,
    pub game_options: OptionMap,
}

impl BattleOptions {
    pub fn new(
        engine_version: impl Into<String>,
        game_version: impl Into<String>,
        map: impl Into<String>,
        founder_id: UserId,
    ) -> Self {
        Self {
            engine_version: engine_version.into(),
            game_version: game_version.into(),
            map: map.into(),
            founder_id,
            start_time: None,
            start_pos_type: StartPosType::default(),
            start_boxes: Vec::new(),
            game_options: OptionMap::new(),
        }
    }
}
