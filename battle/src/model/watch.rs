//! Option watchers that forward changes to the content service

use crate::services::ContentService;
use crate::types::BattleOptions;

/// Remembers the last value it was shown
#[derive(Debug, Default)]
struct Watch<T> {
    last: Option<T>,
}

impl<T: PartialEq + Clone> Watch<T> {
    /// True the first time and whenever `value` differs from the last one seen
    fn observe(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }
        self.last = Some(value.clone());
        true
    }
}

/// Watchers for engine version, game version and map
#[derive(Debug, Default)]
pub(crate) struct OptionWatchers {
    engine: Watch<String>,
    game: Watch<String>,
    map: Watch<String>,
}

impl OptionWatchers {
    /// Fire install requests for every watched option that changed
    pub(crate) fn sync(&mut self, options: &BattleOptions, content: &dyn ContentService) {
        if self.engine.observe(&options.engine_version) {
            tracing::debug!(engine = %options.engine_version, "Engine version changed");
            content.request_engine_install(&options.engine_version);
        }

        if self.game.observe(&options.game_version) {
            tracing::debug!(game = %options.game_version, "Game version changed");
            content.request_game_update(&options.game_version);
        }

        if self.map.observe(&options.map) {
            tracing::debug!(map = %options.map, "Map changed");
            content.request_map_install(&options.map);
        }
    }
}
