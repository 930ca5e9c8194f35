//! Client-side plumbing for skirmish battles.
//!
//! [`LobbyClient`] ties together the lobby session, navigation and content
//! dispatch, and opens offline battles wired to them. Content work queued by
//! battles is carried out by a [`ContentReceiver`] driving your
//! [`ContentHandler`].

mod catalogue;
mod config;
mod handle;
mod handler;
mod receiver;
mod router;
mod session;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use skirmish_battle::{Battle, BattleServices, OfflineBattle, OfflineServices, User};

use crate::session::SessionLink;

pub use skirmish_battle::{BattleConfig, MapData};

pub use catalogue::MapCatalogue;
pub use config::LobbyConfig;
pub use handle::{ContentHandle, ContentRequest, content_channel};
pub use handler::ContentHandler;
pub use receiver::ContentReceiver;
pub use router::MemoryRouter;
pub use session::{LobbySession, OFFLINE_BATTLE_ID, SharedBattle};

/// Main lobby client
pub struct LobbyClient {
    config: LobbyConfig,
    session: Arc<LobbySession>,
    router: Arc<MemoryRouter>,
    content: ContentHandle,
}

impl LobbyClient {
    /// Create a client for `local_user`
    ///
    /// The returned receiver must be run for content requests to be handled.
    pub fn new(config: LobbyConfig, local_user: User, maps: MapCatalogue) -> (Self, ContentReceiver) {
        let (content, receiver) = content_channel(maps);
        let client = Self {
            router: Arc::new(MemoryRouter::new(&config.home_route)),
            session: Arc::new(LobbySession::new(local_user)),
            config,
            content,
        };
        (client, receiver)
    }

    /// Open a new offline battle founded by the local user
    ///
    /// Fails if an offline battle is already open.
    pub fn start_offline_battle(&self) -> Result<SharedBattle> {
        if self.session.in_offline_battle() {
            bail!("Cannot start an offline battle: one is already open");
        }

        let local_user = self
            .session
            .local_user()
            .context("Local user missing from the session")?;

        let content = Arc::new(self.content.clone());
        let link = Arc::new(SessionLink::new(&self.session));
        let services = OfflineServices {
            battle: BattleServices {
                users: link.clone(),
                content: content.clone(),
            },
            launcher: content,
            session: link,
            router: self.router.clone(),
            home_route: self.config.home_route.clone(),
        };

        let mut battle = OfflineBattle::new(self.config.offline_battle(local_user), services);
        battle.open();

        tracing::info!(map = %self.config.map, "Offline battle opened");
        Ok(self.session.set_offline_battle(battle))
    }

    pub fn offline_battle(&self) -> Option<SharedBattle> {
        self.session.offline_battle()
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<LobbySession> {
        &self.session
    }

    pub fn router(&self) -> &Arc<MemoryRouter> {
        &self.router
    }

    pub fn content(&self) -> &ContentHandle {
        &self.content
    }
}
