use serde::{Deserialize, Serialize};

use super::{RESPONSE_FALSE, RESPONSE_TRUE};
use crate::modules::omdb::MovieDetails;

/// View model bound by the details UI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsDto {
    pub response: String,
    pub movie: Option<MovieDetails>,
    pub error: Option<String>,
}

impl MovieDetailsDto {
    pub fn success(movie: MovieDetails) -> Self {
        Self {
            response: RESPONSE_TRUE.to_string(),
            movie: Some(movie),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            response: RESPONSE_FALSE.to_string(),
            movie: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.response == RESPONSE_TRUE
    }
}
