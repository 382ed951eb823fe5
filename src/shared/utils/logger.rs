//! Logging setup and the structured messages the app emits
//!
//! Everything goes through the `log` facade; `env_logger` is the backend and
//! `RUST_LOG` overrides the defaults set here.

use log::{debug, error, info, warn};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn) // Default level, keeps the prompt readable
            .filter_module("moviefinder_lib", log::LevelFilter::Info)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .init();

        info!("Logging system initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

/// Structured messages for searches, navigation and failures
pub struct LogContext;

impl LogContext {
    /// One line per OMDb search: `found` is None when the request goes out
    pub fn search_operation(term: &str, page: u32, found: Option<usize>) {
        match found {
            Some(count) => info!("Search: '{}' page {} returned {} movies", term, page, count),
            None => debug!("Search: asking for '{}' page {}", term, page),
        }
    }

    pub fn navigation(route: &str, device: &str, dispatched: bool) {
        if dispatched {
            info!("Navigate: {} ({})", route, device);
        } else {
            debug!("Navigate: {} skipped ({})", route, device);
        }
    }

    /// A failure the user sees as a negative DTO rather than an error
    pub fn recovered_failure(error: &dyn std::error::Error, context: &str) {
        warn!("{}: {}", context, error);
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Measures one HTTP request from send to decoded body
pub struct RequestTimer {
    start: Instant,
    provider: String,
    endpoint: String,
}

impl RequestTimer {
    pub fn start(provider: &str, endpoint: &str) -> Self {
        debug!("API: {} {} started", provider, endpoint);
        Self {
            start: Instant::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Log the outcome and return the elapsed time
    pub fn finish(self, status: &str) -> u64 {
        let elapsed = self.elapsed_ms();
        info!(
            "API: {} {} {} in {}ms",
            self.provider, self.endpoint, status, elapsed
        );
        elapsed
    }
}
