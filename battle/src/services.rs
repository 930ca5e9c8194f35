//! Collaborators a battle talks to
//!
//! The battle model never reaches for global state: identity lookups, content
//! installation, game launching, session bookkeeping and navigation are all
//! injected through the traits below. Requests are fire-and-forget; the battle
//! never learns whether an install or launch succeeded.

use std::fmt;
use std::sync::Arc;

use crate::model::BattleConfig;
use crate::types::{MapData, User, UserId};

/// Identity lookup for lobby users
pub trait UserDirectory: Send + Sync {
    fn user_by_id(&self, user_id: UserId) -> Option<User>;
}

/// Content installation and resolution
pub trait ContentService: Send + Sync {
    fn request_engine_install(&self, engine_version: &str);

    fn request_game_update(&self, game_version: &str);

    fn request_map_install(&self, script_name: &str);

    /// Look up an installed map, `None` if it is not installed yet
    fn map_by_script_name(&self, script_name: &str) -> Option<MapData>;
}

/// Hands a battle over to the game process
pub trait GameLauncher: Send + Sync {
    fn launch(&self, battle: BattleConfig);
}

/// Session bookkeeping touched when leaving an offline battle
pub trait SessionState: Send + Sync {
    fn clear_offline_battle(&self);

    fn set_local_battle_id(&self, battle_id: Option<i64>);
}

/// Navigation of the display layer
pub trait Router: Send + Sync {
    /// Replace the current route without pushing history
    fn replace(&self, route: &str);
}

/// Collaborators every battle variant needs
#[derive(Clone)]
pub struct BattleServices {
    pub users: Arc<dyn UserDirectory>,
    pub content: Arc<dyn ContentService>,
}

/// Collaborators of an offline battle
#[derive(Clone)]
pub struct OfflineServices {
    pub battle: BattleServices,
    pub launcher: Arc<dyn GameLauncher>,
    pub session: Arc<dyn SessionState>,
    pub router: Arc<dyn Router>,
    /// Route shown after leaving the battle
    pub home_route: String,
}

impl fmt::Debug for OfflineServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfflineServices")
            .field("home_route", &self.home_route)
            .finish_non_exhaustive()
    }
}
