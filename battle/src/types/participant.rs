//! Battle participants: human users and AI bots

use serde::{Deserialize, Serialize};

use super::options::OptionMap;

/// Stable identity of a lobby user
pub type UserId = i64;

/// A user's membership state inside a battle
///
/// `team_id` and `player_id` only carry meaning while the user is not spectating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleStatus {
    /// Battle the user is in, `None` when not in any
    pub battle_id: Option<i64>,
    pub is_spectator: bool,
    pub team_id: u32,
    pub player_id: u32,
    pub ready: bool,
}

/// A human lobby user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub battle_status: BattleStatus,
}

impl User {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            battle_status: BattleStatus::default(),
        }
    }

    /// Place the user on a team as a player
    pub fn on_team(mut self, team_id: u32, player_id: u32) -> Self {
        self.battle_status.is_spectator = false;
        self.battle_status.team_id = team_id;
        self.battle_status.player_id = player_id;
        self
    }

    /// Mark the user as spectating
    pub fn spectating(mut self) -> Self {
        self.battle_status.is_spectator = true;
        self
    }

    pub fn is_spectator(&self) -> bool {
        self.battle_status.is_spectator
    }
}

/// An AI-controlled player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    /// Unique among the bots of a battle
    pub name: String,
    /// AI implementation short name (e.g. `BARb`)
    pub ai_short_name: String,
    /// User who added the bot and hosts its AI
    pub owner_user_id: UserId,
    pub team_id: u32,
    pub player_id: u32,
    pub ai_options: OptionMap,
}

impl Bot {
    pub fn new(
        name: impl Into<String>,
        ai_short_name: impl Into<String>,
        owner_user_id: UserId,
        team_id: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ai_short_name: ai_short_name.into(),
            owner_user_id,
            team_id,
            player_id: 0,
            ai_options: OptionMap::new(),
        }
    }

    pub fn with_player_id(mut self, player_id: u32) -> Self {
        self.player_id = player_id;
        self
    }
}

/// Borrowed view of one battle participant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Participant<'a> {
    Bot(&'a Bot),
    User(&'a User),
}

impl<'a> Participant<'a> {
    /// Bots always contend; users contend unless spectating
    pub fn is_contender(&self) -> bool {
        match self {
            Participant::Bot(_) => true,
            Participant::User(user) => !user.battle_status.is_spectator,
        }
    }

    pub fn team_id(&self) -> u32 {
        match self {
            Participant::Bot(bot) => bot.team_id,
            Participant::User(user) => user.battle_status.team_id,
        }
    }

    pub fn player_id(&self) -> u32 {
        match self {
            Participant::Bot(bot) => bot.player_id,
            Participant::User(user) => user.battle_status.player_id,
        }
    }

    /// Owned key addressing this participant in battle commands
    pub fn id(&self) -> ParticipantId {
        match self {
            Participant::Bot(bot) => ParticipantId::Bot(bot.name.clone()),
            Participant::User(user) => ParticipantId::User(user.user_id),
        }
    }

    pub fn as_bot(&self) -> Option<&'a Bot> {
        match self {
            Participant::Bot(bot) => Some(bot),
            Participant::User(_) => None,
        }
    }

    pub fn as_user(&self) -> Option<&'a User> {
        match self {
            Participant::Bot(_) => None,
            Participant::User(user) => Some(user),
        }
    }
}

/// Key for a participant: bots by name, users by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantId {
    Bot(String),
    User(UserId),
}
