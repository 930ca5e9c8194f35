use anyhow::Result;
use async_trait::async_trait;
use skirmish_battle::{BattleConfig, MapData};

/// Trait for carrying out content requests queued by battles.
///
/// Implement this trait to install content and launch the game. All methods
/// have default no-op implementations, so you only need to implement the
/// requests you care about. Errors are logged by the receiver and never
/// reach the battle that queued the request.
///
/// # Example
///
/// ```ignore
/// struct Downloader {
///     maps_dir: PathBuf,
/// }
///
/// #[async_trait]
/// impl ContentHandler for Downloader {
///     async fn on_map_install(&mut self, script_name: &str) -> Result<Option<MapData>> {
///         let file_name = download_map(&self.maps_dir, script_name).await?;
///         Ok(Some(MapData::new(script_name, file_name)))
///     }
/// }
/// ```
#[async_trait]
pub trait ContentHandler: Send {
    /// Called when a battle needs an engine version installed.
    async fn on_engine_install(&mut self, engine_version: &str) -> Result<()> {
        let _ = engine_version;
        Ok(())
    }

    /// Called when a battle selects a game version.
    async fn on_game_update(&mut self, game_version: &str) -> Result<()> {
        let _ = game_version;
        Ok(())
    }

    /// Called when a battle selects a map that is not installed yet.
    /// Return the installed map to make it resolvable by battles.
    async fn on_map_install(&mut self, script_name: &str) -> Result<Option<MapData>> {
        let _ = script_name;
        Ok(None)
    }

    /// Called when a battle is started.
    async fn on_launch(&mut self, battle: &BattleConfig) -> Result<()> {
        let _ = battle;
        Ok(())
    }
}
