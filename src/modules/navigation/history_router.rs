use super::navigator::Navigator;
use crate::shared::errors::{AppError, AppResult};
use std::sync::Mutex;

/// In-memory router that keeps the stack of visited routes
pub struct HistoryRouter {
    history: Mutex<Vec<String>>,
}

impl HistoryRouter {
    pub fn new(initial_route: &str) -> Self {
        Self {
            history: Mutex::new(vec![to_url(&[initial_route.to_string()])]),
        }
    }

    /// URL of the active route
    pub fn current_url(&self) -> String {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_else(|| "/".to_string())
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Navigator for HistoryRouter {
    fn navigate(&self, commands: Vec<String>) -> AppResult<()> {
        let segments: Vec<String> = commands
            .iter()
            .map(|c| c.trim_matches('/').to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if segments.is_empty() {
            return Err(AppError::InvalidInput(
                "Navigation requires at least one route segment".to_string(),
            ));
        }

        let url = to_url(&segments);
        let mut history = self
            .history
            .lock()
            .map_err(|_| AppError::InternalError("Router history lock poisoned".to_string()))?;
        log::debug!("Router: {} -> {}", history.last().map(String::as_str).unwrap_or("/"), url);
        history.push(url);
        Ok(())
    }
}

fn to_url(segments: &[String]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}
