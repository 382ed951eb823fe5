use crate::{
    modules::omdb::domain::{MovieDetails, OmdbSearchResponse, OmdbService},
    shared::{
        config::AppConfig,
        errors::{AppError, AppResult},
        utils::LogContext,
    },
};
use async_trait::async_trait;

use super::http_client::RateLimitClient;

/// OMDb (Open Movie Database) adapter over its single REST endpoint
/// Search uses `s=` with `page=`; details use `i=` with the full plot
pub struct OmdbClient {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: String, base_url: String, requests_per_second: u32) -> AppResult<Self> {
        Ok(Self::with_client(
            RateLimitClient::for_omdb(requests_per_second)?,
            api_key,
            base_url,
        ))
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            config.omdb_api_key.clone(),
            config.omdb_base_url.clone(),
            config.omdb_requests_per_second,
        )
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    /// Build URL with API key and additional query parameters
    pub fn build_url(&self, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}?apikey={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            if *key != "apikey" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }
}

#[async_trait]
impl OmdbService for OmdbClient {
    async fn search_for(&self, term: &str, page: u32) -> AppResult<OmdbSearchResponse> {
        if page == 0 {
            return Err(AppError::InvalidInput("OMDb pages start at 1".to_string()));
        }

        let url = self.build_url(&[("s", term.to_string()), ("page", page.to_string())]);
        LogContext::search_operation(term, page, None);

        let response: OmdbSearchResponse = self.http_client.get(&url, "search").await?;

        let found = response.search.as_ref().map(Vec::len).unwrap_or(0);
        LogContext::search_operation(term, page, Some(found));
        Ok(response)
    }

    async fn find_by_id(&self, imdb_id: &str) -> AppResult<MovieDetails> {
        let imdb_id = imdb_id.trim();
        if imdb_id.is_empty() {
            return Err(AppError::InvalidInput("IMDb id is empty".to_string()));
        }

        let url = self.build_url(&[("i", imdb_id.to_string()), ("plot", "full".to_string())]);

        log::info!("OMDb: Getting title by ID '{}'", imdb_id);

        let details: MovieDetails = self.http_client.get(&url, "title").await?;

        if details.is_success() {
            log::info!("OMDb: Retrieved title by ID '{}'", imdb_id);
        } else {
            log::info!(
                "OMDb: No title for ID '{}': {}",
                imdb_id,
                details.error.as_deref().unwrap_or("unknown error")
            );
        }
        Ok(details)
    }
}
