use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::catalogue::MapCatalogue;
use crate::handle::ContentRequest;
use crate::handler::ContentHandler;

/// Receives queued content requests and dispatches them to a handler.
pub struct ContentReceiver {
    incoming: mpsc::UnboundedReceiver<ContentRequest>,
    maps: Arc<RwLock<MapCatalogue>>,
}

impl ContentReceiver {
    pub(crate) fn new(
        incoming: mpsc::UnboundedReceiver<ContentRequest>,
        maps: Arc<RwLock<MapCatalogue>>,
    ) -> Self {
        Self { incoming, maps }
    }

    /// Run the request loop, dispatching to the handler.
    ///
    /// This will run until every [`ContentHandle`](crate::ContentHandle) is dropped.
    pub async fn run<H: ContentHandler>(&mut self, handler: &mut H) {
        while let Some(request) = self.incoming.recv().await {
            self.dispatch(handler, request).await;
        }
        tracing::debug!("Content channel closed");
    }

    /// Dispatch the requests already queued without waiting for more.
    ///
    /// Returns how many requests were handled.
    pub async fn drain<H: ContentHandler>(&mut self, handler: &mut H) -> usize {
        let mut handled = 0;
        while let Ok(request) = self.incoming.try_recv() {
            self.dispatch(handler, request).await;
            handled += 1;
        }
        handled
    }

    /// Dispatch a single request; failures are logged, not returned
    async fn dispatch<H: ContentHandler>(&self, handler: &mut H, request: ContentRequest) {
        let result = match request {
            ContentRequest::InstallEngine(version) => handler
                .on_engine_install(&version)
                .await
                .with_context(|| format!("Failed to install engine {}", version)),
            ContentRequest::UpdateGame(version) => handler
                .on_game_update(&version)
                .await
                .with_context(|| format!("Failed to update game to {}", version)),
            ContentRequest::InstallMap(script_name) => self.install_map(handler, &script_name).await,
            ContentRequest::Launch(battle) => handler
                .on_launch(&battle)
                .await
                .with_context(|| format!("Failed to launch battle on {}", battle.battle_options.map)),
        };

        if let Err(e) = result {
            let error = format!("{:#}", e);
            tracing::warn!(error = %error, "Content request failed");
        }
    }

    async fn install_map<H: ContentHandler>(&self, handler: &mut H, script_name: &str) -> Result<()> {
        if self.is_installed(script_name) {
            tracing::debug!(map = script_name, "Map already installed");
            return Ok(());
        }

        let installed = handler
            .on_map_install(script_name)
            .await
            .with_context(|| format!("Failed to install map {}", script_name))?;

        match installed {
            Some(map) => {
                tracing::info!(map = %map.script_name, file = %map.file_name, "Map installed");
                if let Ok(mut maps) = self.maps.write() {
                    maps.insert(map);
                }
            }
            None => tracing::debug!(map = script_name, "Map install reported no data"),
        }
        Ok(())
    }

    fn is_installed(&self, script_name: &str) -> bool {
        self.maps
            .read()
            .map(|m| m.contains(script_name))
            .unwrap_or(false)
    }
}
