use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, Weak};

use skirmish_battle::{OfflineBattle, SessionState, User, UserDirectory, UserId};

/// Battle id recorded on the local user while an offline battle is open
pub const OFFLINE_BATTLE_ID: i64 = 0;

/// Shared handle to the open offline battle
pub type SharedBattle = Arc<Mutex<OfflineBattle>>;

/// Users known to the lobby and the local user's battle membership
pub struct LobbySession {
    users: RwLock<HashMap<UserId, User>>,
    local_user_id: UserId,
    offline_battle: RwLock<Option<SharedBattle>>,
}

impl LobbySession {
    pub fn new(local_user: User) -> Self {
        let local_user_id = local_user.user_id;
        Self {
            users: RwLock::new(HashMap::from([(local_user_id, local_user)])),
            local_user_id,
            offline_battle: RwLock::new(None),
        }
    }

    /// Add or replace a known user
    pub fn register_user(&self, user: User) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user.user_id, user);
        }
    }

    /// Find a known user by display name
    pub fn user_by_name(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .ok()?
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub fn local_user_id(&self) -> UserId {
        self.local_user_id
    }

    pub fn local_user(&self) -> Option<User> {
        self.user_by_id(self.local_user_id)
    }

    pub fn offline_battle(&self) -> Option<SharedBattle> {
        self.offline_battle.read().ok()?.clone()
    }

    pub fn in_offline_battle(&self) -> bool {
        self.offline_battle
            .read()
            .map(|b| b.is_some())
            .unwrap_or(false)
    }

    /// Make `battle` the open offline battle and record the membership
    pub fn set_offline_battle(&self, battle: OfflineBattle) -> SharedBattle {
        let battle = Arc::new(Mutex::new(battle));
        if let Ok(mut slot) = self.offline_battle.write() {
            *slot = Some(battle.clone());
        }
        self.set_local_battle_id(Some(OFFLINE_BATTLE_ID));
        battle
    }
}

impl UserDirectory for LobbySession {
    fn user_by_id(&self, user_id: UserId) -> Option<User> {
        self.users.read().ok()?.get(&user_id).cloned()
    }
}

impl SessionState for LobbySession {
    fn clear_offline_battle(&self) {
        if let Ok(mut slot) = self.offline_battle.write() {
            *slot = None;
        }
    }

    fn set_local_battle_id(&self, battle_id: Option<i64>) {
        if let Ok(mut users) = self.users.write()
            && let Some(local_user) = users.get_mut(&self.local_user_id)
        {
            local_user.battle_status.battle_id = battle_id;
        }
    }
}

/// Non-owning view of a session handed to the battles it holds
///
/// The session owns its offline battle, so the battle must not own the
/// session back. Once the session is gone lookups find nothing and updates
/// are ignored.
#[derive(Clone)]
pub(crate) struct SessionLink(Weak<LobbySession>);

impl SessionLink {
    pub(crate) fn new(session: &Arc<LobbySession>) -> Self {
        Self(Arc::downgrade(session))
    }
}

impl UserDirectory for SessionLink {
    fn user_by_id(&self, user_id: UserId) -> Option<User> {
        self.0.upgrade()?.user_by_id(user_id)
    }
}

impl SessionState for SessionLink {
    fn clear_offline_battle(&self) {
        if let Some(session) = self.0.upgrade() {
            session.clear_offline_battle();
        }
    }

    fn set_local_battle_id(&self, battle_id: Option<i64>) {
        if let Some(session) = self.0.upgrade() {
            session.set_local_battle_id(battle_id);
        }
    }
}
