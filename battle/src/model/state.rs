//! BattleCore - canonical battle state and its derived views

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::normalize::normalize_ids;
use super::watch::OptionWatchers;
use crate::query;
use crate::services::BattleServices;
use crate::types::{BattleOptions, Bot, MapData, OptionMap, Participant, User, UserId};

/// Everything needed to build a battle, and an owned copy of one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleConfig {
    pub battle_options: BattleOptions,
    pub bots: Vec<Bot>,
    pub users: Vec<User>,
}

/// State shared by every battle variant
///
/// Owns the options and the roster. Views such as [`BattleCore::teams`] are
/// computed from the roster on every call and are never stored. Roster changes
/// go through [`BattleCore::update_roster`] so contender ids are renumbered
/// before the caller regains control; option changes go through
/// [`BattleCore::update_options`] so the content watchers see them.
pub struct BattleCore {
    options: BattleOptions,
    bots: Vec<Bot>,
    users: Vec<User>,
    services: BattleServices,
    /// `None` until the battle is opened
    watchers: Option<OptionWatchers>,
}

impl BattleCore {
    pub fn new(config: BattleConfig, services: BattleServices) -> Self {
        let BattleConfig {
            battle_options,
            mut bots,
            mut users,
        } = config;
        normalize_ids(&mut bots, &mut users);

        Self {
            options: battle_options,
            bots,
            users,
            services,
            watchers: None,
        }
    }

    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn services(&self) -> &BattleServices {
        &self.services
    }

    /// Find a bot by its unique name
    pub fn bot(&self, name: &str) -> Option<&Bot> {
        self.bots.iter().find(|bot| bot.name == name)
    }

    /// Find a user of this battle by id
    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.user_id == user_id)
    }

    /// Bots followed by users
    pub fn participants(&self) -> Vec<Participant<'_>> {
        self.bots
            .iter()
            .map(Participant::Bot)
            .chain(self.users.iter().map(Participant::User))
            .collect()
    }

    /// Participants that take part in the game (everyone but spectators)
    pub fn contenders(&self) -> Vec<Participant<'_>> {
        query::contenders(self.participants())
    }

    /// Users that are not spectating
    pub fn players(&self) -> Vec<&User> {
        self.users.iter().filter(|user| !user.is_spectator()).collect()
    }

    pub fn spectators(&self) -> Vec<&User> {
        self.users.iter().filter(|user| user.is_spectator()).collect()
    }

    /// Contenders grouped by team id, ascending
    pub fn teams(&self) -> BTreeMap<u32, Vec<Participant<'_>>> {
        query::group_by_team(self.participants())
    }

    /// AI options of every bot, keyed by bot name
    pub fn bot_options(&self) -> BTreeMap<&str, &OptionMap> {
        self.bots
            .iter()
            .map(|bot| (bot.name.as_str(), &bot.ai_options))
            .collect()
    }

    /// The user who created the battle
    ///
    /// A founder id that does not resolve is a bug in whoever built the
    /// battle; it is logged and reported as `None`.
    pub fn founder(&self) -> Option<User> {
        let founder = self.services.users.user_by_id(self.options.founder_id);
        if founder.is_none() {
            tracing::warn!(founder_id = self.options.founder_id, "Battle founder not found");
        }
        founder
    }

    /// The selected map, if it is installed
    pub fn map(&self) -> Option<MapData> {
        self.services.content.map_by_script_name(&self.options.map)
    }

    /// "Running for ..." text once the game has started
    pub fn friendly_runtime(&self, now: DateTime<Utc>) -> Option<String> {
        query::friendly_runtime(self.options.start_time, now)
    }

    /// Contenders on the given team, empty for unknown teams
    pub fn get_team_participants(&self, team_id: u32) -> Vec<Participant<'_>> {
        query::team_of(self.participants(), team_id)
    }

    /// Find a participant by bot name or user display name
    ///
    /// Bots are searched before users, so a bot shadows a user with the same
    /// name. User names are resolved through the user directory.
    pub fn get_participant_by_name(&self, name: &str) -> Option<Participant<'_>> {
        self.participants()
            .into_iter()
            .find(|participant| match participant {
                Participant::Bot(bot) => bot.name == name,
                Participant::User(user) => self
                    .services
                    .users
                    .user_by_id(user.user_id)
                    .is_some_and(|resolved| resolved.username == name),
            })
    }

    /// Start forwarding engine, game and map changes to the content service
    ///
    /// Requests for the current values are sent immediately. Opening again
    /// re-sends them.
    pub fn open(&mut self) {
        tracing::info!(
            engine = %self.options.engine_version,
            game = %self.options.game_version,
            map = %self.options.map,
            "Opening battle"
        );
        let watchers = self.watchers.insert(OptionWatchers::default());
        watchers.sync(&self.options, self.services.content.as_ref());
    }

    pub fn is_open(&self) -> bool {
        self.watchers.is_some()
    }

    /// Owned copy of the options and roster
    pub fn snapshot(&self) -> BattleConfig {
        BattleConfig {
            battle_options: self.options.clone(),
            bots: self.bots.clone(),
            users: self.users.clone(),
        }
    }

    /// Mutate the options, then notify watchers of any change
    pub fn update_options<R>(&mut self, f: impl FnOnce(&mut BattleOptions) -> R) -> R {
        let result = f(&mut self.options);
        if let Some(watchers) = self.watchers.as_mut() {
            watchers.sync(&self.options, self.services.content.as_ref());
        }
        result
    }

    /// Mutate the roster, then renumber contender ids
    pub fn update_roster<R>(&mut self, f: impl FnOnce(&mut Vec<Bot>, &mut Vec<User>) -> R) -> R {
        let result = f(&mut self.bots, &mut self.users);
        normalize_ids(&mut self.bots, &mut self.users);
        result
    }

    /// Renumber contender ids; true if anything changed
    pub fn normalize(&mut self) -> bool {
        normalize_ids(&mut self.bots, &mut self.users)
    }
}

impl fmt::Debug for BattleCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleCore")
            .field("options", &self.options)
            .field("bots", &self.bots)
            .field("users", &self.users)
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}
