//! OfflineBattle - a local battle with no server behind it

use super::normalize::next_player_id;
use super::state::{BattleConfig, BattleCore};
use super::variant::Battle;
use crate::boxes::start_boxes_for_map;
use crate::error::BattleError;
use crate::services::OfflineServices;
use crate::types::{
    Bot, OptionMap, ParticipantId, StartBox, StartPosType, User, UserId,
};

/// Single-process battle used for skirmishes against bots
///
/// Every command applies directly to the battle's own state.
#[derive(Debug)]
pub struct OfflineBattle {
    core: BattleCore,
    services: OfflineServices,
}

impl OfflineBattle {
    pub fn new(config: BattleConfig, services: OfflineServices) -> Self {
        Self {
            core: BattleCore::new(config, services.battle.clone()),
            services,
        }
    }
}

fn find_user(users: &mut [User], user_id: UserId) -> Result<&mut User, BattleError> {
    users
        .iter_mut()
        .find(|user| user.user_id == user_id)
        .ok_or(BattleError::UserNotFound(user_id))
}

fn find_bot<'a>(bots: &'a mut [Bot], name: &str) -> Result<&'a mut Bot, BattleError> {
    bots.iter_mut()
        .find(|bot| bot.name == name)
        .ok_or_else(|| BattleError::BotNotFound(name.to_string()))
}

impl Battle for OfflineBattle {
    fn core(&self) -> &BattleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BattleCore {
        &mut self.core
    }

    fn leave(&mut self) {
        tracing::info!("Leaving offline battle");
        self.services.session.clear_offline_battle();
        self.services.session.set_local_battle_id(None);
        self.services.router.replace(&self.services.home_route);
    }

    fn start(&mut self) {
        tracing::info!(
            map = %self.core.options().map,
            contenders = self.core.contenders().len(),
            "Launching offline battle"
        );
        self.services.launcher.launch(self.core.snapshot());
    }

    fn set_engine(&mut self, engine_version: &str) {
        self.core
            .update_options(|options| options.engine_version = engine_version.to_string());
    }

    fn set_game(&mut self, game_version: &str) {
        self.core
            .update_options(|options| options.game_version = game_version.to_string());
    }

    fn set_map(&mut self, map: &str) {
        self.core.update_options(|options| options.map = map.to_string());
        self.set_start_boxes(start_boxes_for_map(map).to_vec());
    }

    fn set_start_pos_type(&mut self, start_pos_type: StartPosType) {
        self.core
            .update_options(|options| options.start_pos_type = start_pos_type);
    }

    fn set_start_boxes(&mut self, start_boxes: Vec<StartBox>) {
        self.core
            .update_options(|options| options.start_boxes = start_boxes);
    }

    fn set_game_options(&mut self, game_options: OptionMap) {
        self.core
            .update_options(|options| options.game_options = game_options);
    }

    fn set_bot_options(&mut self, bot_name: &str, options: OptionMap) -> Result<(), BattleError> {
        // AI options do not affect ids, but the roster is only reachable
        // through update_roster
        self.core.update_roster(|bots, _| {
            find_bot(bots, bot_name)?.ai_options = options;
            Ok(())
        })
    }

    fn add_bot(&mut self, mut bot: Bot) -> Result<(), BattleError> {
        self.core.update_roster(|bots, users| {
            if bots.iter().any(|existing| existing.name == bot.name) {
                return Err(BattleError::DuplicateBot(bot.name));
            }
            bot.player_id = next_player_id(bots, users);
            tracing::debug!(bot = %bot.name, team = bot.team_id, "Adding bot");
            bots.push(bot);
            Ok(())
        })
    }

    fn remove_bot(&mut self, bot_name: &str) -> Result<Bot, BattleError> {
        self.core.update_roster(|bots, _| {
            let index = bots
                .iter()
                .position(|bot| bot.name == bot_name)
                .ok_or_else(|| BattleError::BotNotFound(bot_name.to_string()))?;
            tracing::debug!(bot = %bot_name, "Removing bot");
            Ok(bots.remove(index))
        })
    }

    fn player_to_spectator(&mut self, user_id: UserId) -> Result<(), BattleError> {
        self.core.update_roster(|_, users| {
            find_user(users, user_id)?.battle_status.is_spectator = true;
            Ok(())
        })
    }

    fn spectator_to_player(&mut self, user_id: UserId, team_id: u32) -> Result<(), BattleError> {
        self.core.update_roster(|bots, users| {
            let player_id = next_player_id(bots, users);
            let status = &mut find_user(users, user_id)?.battle_status;
            status.player_id = player_id;
            status.is_spectator = false;
            status.team_id = team_id;
            Ok(())
        })
    }

    fn set_contender_team(
        &mut self,
        contender: &ParticipantId,
        team_id: u32,
    ) -> Result<(), BattleError> {
        self.core.update_roster(|bots, users| {
            match contender {
                ParticipantId::Bot(name) => find_bot(bots, name)?.team_id = team_id,
                ParticipantId::User(user_id) => {
                    find_user(users, *user_id)?.battle_status.team_id = team_id
                }
            }
            Ok(())
        })
    }
}
