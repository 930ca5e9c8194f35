use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use skirmish_battle::{BattleConfig, ContentService, GameLauncher, MapData};
use tokio::sync::mpsc;

use crate::catalogue::MapCatalogue;
use crate::receiver::ContentReceiver;

/// Work queued for the content receiver
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRequest {
    InstallEngine(String),
    UpdateGame(String),
    InstallMap(String),
    Launch(Box<BattleConfig>),
}

/// Cloneable handle battles use to queue content work.
///
/// Sending never waits: requests go into an unbounded channel drained by a
/// [`ContentReceiver`]. Map lookups read the shared catalogue directly.
#[derive(Clone)]
pub struct ContentHandle {
    tx: mpsc::UnboundedSender<ContentRequest>,
    maps: Arc<RwLock<MapCatalogue>>,
}

/// Create a connected handle and receiver over an initial map catalogue
pub fn content_channel(maps: MapCatalogue) -> (ContentHandle, ContentReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let maps = Arc::new(RwLock::new(maps));
    let handle = ContentHandle {
        tx,
        maps: maps.clone(),
    };
    (handle, ContentReceiver::new(rx, maps))
}

impl ContentHandle {
    pub fn send(&self, request: ContentRequest) -> Result<()> {
        self.tx
            .send(request)
            .map_err(|_| anyhow!("Content receiver stopped"))
    }

    fn send_or_log(&self, request: ContentRequest) {
        if let Err(e) = self.send(request) {
            tracing::warn!(error = %e, "Dropping content request");
        }
    }

    pub fn is_installed(&self, script_name: &str) -> bool {
        self.maps
            .read()
            .map(|m| m.contains(script_name))
            .unwrap_or(false)
    }

    /// True once the receiver has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl ContentService for ContentHandle {
    fn request_engine_install(&self, engine_version: &str) {
        self.send_or_log(ContentRequest::InstallEngine(engine_version.to_string()));
    }

    fn request_game_update(&self, game_version: &str) {
        self.send_or_log(ContentRequest::UpdateGame(game_version.to_string()));
    }

    fn request_map_install(&self, script_name: &str) {
        self.send_or_log(ContentRequest::InstallMap(script_name.to_string()));
    }

    fn map_by_script_name(&self, script_name: &str) -> Option<MapData> {
        self.maps.read().ok()?.get(script_name).cloned()
    }
}

impl GameLauncher for ContentHandle {
    fn launch(&self, battle: BattleConfig) {
        self.send_or_log(ContentRequest::Launch(Box::new(battle)));
    }
}
