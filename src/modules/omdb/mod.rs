pub mod domain;
pub mod infrastructure;

pub use domain::{MovieDetails, MovieSummary, OmdbSearchResponse, OmdbService, Rating};
pub use infrastructure::OmdbClient;
