//! Application configuration loaded from the environment
//!
//! `.env` is read first (when present) so local development does not need
//! exported variables.

use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub search_debounce: Duration,
    pub omdb_requests_per_second: u32,
    pub device_user_agent: Option<String>,
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let omdb_api_key = lookup("OMDB_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::ConfigError("OMDB_API_KEY is not set".to_string()))?;

        let omdb_base_url = lookup("OMDB_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());

        if !omdb_base_url.starts_with("http://") && !omdb_base_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "OMDB_BASE_URL must be an http(s) URL, got '{}'",
                omdb_base_url
            )));
        }

        let debounce_ms = match lookup("SEARCH_DEBOUNCE_MS") {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => DEFAULT_DEBOUNCE_MS,
        };

        let omdb_requests_per_second = match lookup("OMDB_REQUESTS_PER_SECOND") {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => DEFAULT_REQUESTS_PER_SECOND,
        };
        if omdb_requests_per_second == 0 {
            return Err(AppError::ConfigError(
                "OMDB_REQUESTS_PER_SECOND must be greater than zero".to_string(),
            ));
        }

        let device_user_agent = lookup("DEVICE_USER_AGENT").filter(|ua| !ua.trim().is_empty());

        Ok(Self {
            omdb_api_key,
            omdb_base_url,
            search_debounce: Duration::from_millis(debounce_ms),
            omdb_requests_per_second,
            device_user_agent,
        })
    }
}
