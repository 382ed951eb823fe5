use async_trait::async_trait;

use super::models::{MovieDetails, OmdbSearchResponse};
use crate::shared::errors::AppResult;

/// Port for the OMDb lookup capability
/// The HTTP adapter implements it; tests substitute scripted fakes
#[async_trait]
pub trait OmdbService: Send + Sync {
    /// Search titles by free text, one OMDb page at a time (pages start at 1)
    async fn search_for(&self, term: &str, page: u32) -> AppResult<OmdbSearchResponse>;

    /// Fetch the full record of one title by its IMDb id
    async fn find_by_id(&self, imdb_id: &str) -> AppResult<MovieDetails>;
}
