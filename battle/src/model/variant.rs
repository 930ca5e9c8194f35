//! The command surface every battle variant implements

use super::state::BattleCore;
use crate::error::BattleError;
use crate::types::{
    Bot, OptionMap, Participant, ParticipantId, StartBox, StartPosType, UserId,
};

/// A battle the local user is part of
///
/// Variants differ in where commands take effect: an offline battle applies
/// them to its own state, a hosted battle would forward them to the server.
/// Lookups and views live on the shared [`BattleCore`].
pub trait Battle {
    fn core(&self) -> &BattleCore;

    fn core_mut(&mut self) -> &mut BattleCore;

    /// Start forwarding option changes to the content service
    fn open(&mut self) {
        self.core_mut().open();
    }

    fn get_team_participants(&self, team_id: u32) -> Vec<Participant<'_>> {
        self.core().get_team_participants(team_id)
    }

    fn get_participant_by_name(&self, name: &str) -> Option<Participant<'_>> {
        self.core().get_participant_by_name(name)
    }

    fn leave(&mut self);

    fn start(&mut self);

    fn set_map(&mut self, map: &str);

    fn set_game(&mut self, game_version: &str);

    fn set_engine(&mut self, engine_version: &str);

    fn set_start_pos_type(&mut self, start_pos_type: StartPosType);

    fn set_start_boxes(&mut self, start_boxes: Vec<StartBox>);

    /// Replace all game options
    fn set_game_options(&mut self, options: OptionMap);

    /// Replace the AI options of the named bot
    fn set_bot_options(&mut self, bot_name: &str, options: OptionMap) -> Result<(), BattleError>;

    /// Add a bot; it takes the next free player id, whatever `bot` carries
    fn add_bot(&mut self, bot: Bot) -> Result<(), BattleError>;

    /// Remove the named bot, returning it
    fn remove_bot(&mut self, bot_name: &str) -> Result<Bot, BattleError>;

    fn player_to_spectator(&mut self, user_id: UserId) -> Result<(), BattleError>;

    /// Move a spectator onto `team_id` with the next free player id
    fn spectator_to_player(&mut self, user_id: UserId, team_id: u32) -> Result<(), BattleError>;

    fn set_contender_team(
        &mut self,
        contender: &ParticipantId,
        team_id: u32,
    ) -> Result<(), BattleError>;
}
