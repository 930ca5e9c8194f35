//! In-memory collaborators for unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::model::BattleConfig;
use crate::services::{
    BattleServices, ContentService, GameLauncher, OfflineServices, Router, SessionState,
    UserDirectory,
};
use crate::types::{MapData, User, UserId};

#[derive(Default)]
pub(crate) struct FakeDirectory {
    users: Mutex<HashMap<UserId, User>>,
}

impl FakeDirectory {
    pub(crate) fn with_users(users: &[User]) -> Self {
        let directory = Self::default();
        for user in users {
            directory.add(user.clone());
        }
        directory
    }

    pub(crate) fn add(&self, user: User) {
        self.users.lock().unwrap().insert(user.user_id, user);
    }

    pub(crate) fn rename(&self, user_id: UserId, username: &str) {
        if let Some(user) = self.users.lock().unwrap().get_mut(&user_id) {
            user.username = username.to_string();
        }
    }
}

impl UserDirectory for FakeDirectory {
    fn user_by_id(&self, user_id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&user_id).cloned()
    }
}

/// Records requests as `kind:value` strings
#[derive(Default)]
pub(crate) struct FakeContent {
    requests: Mutex<Vec<String>>,
    maps: Mutex<HashMap<String, MapData>>,
}

impl FakeContent {
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }

    pub(crate) fn install_map(&self, map: MapData) {
        self.maps.lock().unwrap().insert(map.script_name.clone(), map);
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

impl ContentService for FakeContent {
    fn request_engine_install(&self, engine_version: &str) {
        self.record(format!("engine:{}", engine_version));
    }

    fn request_game_update(&self, game_version: &str) {
        self.record(format!("game:{}", game_version));
    }

    fn request_map_install(&self, script_name: &str) {
        self.record(format!("map:{}", script_name));
    }

    fn map_by_script_name(&self, script_name: &str) -> Option<MapData> {
        self.maps.lock().unwrap().get(script_name).cloned()
    }
}

#[derive(Default)]
pub(crate) struct FakeLauncher {
    pub(crate) launched: Mutex<Vec<BattleConfig>>,
}

impl GameLauncher for FakeLauncher {
    fn launch(&self, battle: BattleConfig) {
        self.launched.lock().unwrap().push(battle);
    }
}

pub(crate) struct FakeSession {
    pub(crate) has_offline_battle: Mutex<bool>,
    pub(crate) battle_id: Mutex<Option<i64>>,
}

impl Default for FakeSession {
    fn default() -> Self {
        Self {
            has_offline_battle: Mutex::new(true),
            battle_id: Mutex::new(Some(0)),
        }
    }
}

impl SessionState for FakeSession {
    fn clear_offline_battle(&self) {
        *self.has_offline_battle.lock().unwrap() = false;
    }

    fn set_local_battle_id(&self, battle_id: Option<i64>) {
        *self.battle_id.lock().unwrap() = battle_id;
    }
}

#[derive(Default)]
pub(crate) struct FakeRouter {
    pub(crate) route: Mutex<Option<String>>,
}

impl Router for FakeRouter {
    fn replace(&self, route: &str) {
        *self.route.lock().unwrap() = Some(route.to_string());
    }
}

/// Every fake wired together, kept around for assertions
pub(crate) struct Fakes {
    pub(crate) directory: Arc<FakeDirectory>,
    pub(crate) content: Arc<FakeContent>,
    pub(crate) launcher: Arc<FakeLauncher>,
    pub(crate) session: Arc<FakeSession>,
    pub(crate) router: Arc<FakeRouter>,
}

impl Fakes {
    pub(crate) fn new(users: &[User]) -> Self {
        Self {
            directory: Arc::new(FakeDirectory::with_users(users)),
            content: Arc::new(FakeContent::default()),
            launcher: Arc::new(FakeLauncher::default()),
            session: Arc::new(FakeSession::default()),
            router: Arc::new(FakeRouter::default()),
        }
    }

    pub(crate) fn offline_services(&self) -> OfflineServices {
        OfflineServices {
            battle: BattleServices {
                users: self.directory.clone(),
                content: self.content.clone(),
            },
            launcher: self.launcher.clone(),
            session: self.session.clone(),
            router: self.router.clone(),
            home_route: "/home".to_string(),
        }
    }
}
