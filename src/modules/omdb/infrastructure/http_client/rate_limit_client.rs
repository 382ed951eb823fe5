//! Paced HTTP client shared by the OMDb adapter
//!
//! Every request waits for the rate limiter first. Failures are returned
//! as they are; the caller decides what the user sees.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RequestTimer;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client that paces requests to a single provider
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    user_agent: String,
    provider_name: String,
}

/// Error body some providers attach to non-2xx answers
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl RateLimitClient {
    /// Create a client for OMDb with the given request rate
    pub fn for_omdb(requests_per_second: u32) -> AppResult<Self> {
        Self::new(
            "OMDb",
            requests_per_second,
            concat!("moviefinder/", env!("CARGO_PKG_VERSION")).to_string(),
        )
    }

    /// Create a custom client
    pub fn new(provider_name: &str, requests_per_second: u32, user_agent: String) -> AppResult<Self> {
        let per_second = NonZeroU32::new(requests_per_second).ok_or_else(|| {
            AppError::ConfigError(format!(
                "{} request rate must be greater than zero",
                provider_name
            ))
        })?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
            user_agent,
            provider_name: provider_name.to_string(),
        })
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T>(&self, url: &str, endpoint: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let timer = RequestTimer::start(&self.provider_name, endpoint);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(AppError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| status.to_string());
            timer.finish(status.as_str());
            return Err(AppError::from_status(status.as_u16(), &detail));
        }

        let parsed = self.parse_response(response).await;
        timer.finish(status.as_str());
        parsed
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate(&response_text, 200)
            ))
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
