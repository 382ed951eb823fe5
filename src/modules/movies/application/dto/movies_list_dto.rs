use serde::{Deserialize, Serialize};

use super::{RESPONSE_FALSE, RESPONSE_TRUE};
use crate::modules::omdb::MovieSummary;
use crate::shared::application::PageWindow;

/// View model bound by the list UI
///
/// `response` mirrors OMDb's flag as a lowercase string; it is empty until
/// the first search completes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviesListDto {
    pub response: String,
    pub movies: Vec<MovieSummary>,
    pub error: Option<String>,
    pub has_next: bool,
    pub page: u32,
    pub total_results: Option<u64>,
}

impl MoviesListDto {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn success(response: &str, movies: Vec<MovieSummary>, window: &PageWindow) -> Self {
        let response = if response.is_empty() {
            RESPONSE_TRUE.to_string()
        } else {
            response.to_lowercase()
        };
        Self {
            response,
            movies,
            error: None,
            has_next: window.has_next(),
            page: window.page,
            total_results: window.total_results,
        }
    }

    pub fn failure(error: String, movies: Vec<MovieSummary>, page: u32) -> Self {
        Self {
            response: RESPONSE_FALSE.to_string(),
            movies,
            error: Some(error),
            has_next: false,
            page,
            total_results: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response == RESPONSE_TRUE
    }

    pub fn is_pending(&self) -> bool {
        self.response.is_empty()
    }
}
