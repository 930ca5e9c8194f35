use std::sync::RwLock;

use skirmish_battle::Router;

/// In-memory navigation history for the display layer
pub struct MemoryRouter {
    history: RwLock<Vec<String>>,
}

impl MemoryRouter {
    pub fn new(initial_route: &str) -> Self {
        Self {
            history: RwLock::new(vec![initial_route.to_string()]),
        }
    }

    pub fn push(&self, route: &str) {
        if let Ok(mut history) = self.history.write() {
            history.push(route.to_string());
        }
    }

    pub fn current(&self) -> Option<String> {
        self.history.read().ok()?.last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .read()
            .map(|h| h.clone())
            .unwrap_or_default()
    }
}

impl Router for MemoryRouter {
    fn replace(&self, route: &str) {
        if let Ok(mut history) = self.history.write() {
            tracing::debug!(route, "Replacing route");
            match history.last_mut() {
                Some(current) => *current = route.to_string(),
                None => history.push(route.to_string()),
            }
        }
    }
}
