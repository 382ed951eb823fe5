/// Test data factories for OMDb payloads
use moviefinder_lib::modules::omdb::{MovieDetails, MovieSummary, OmdbSearchResponse};

pub fn movie(title: &str) -> MovieSummary {
    MovieSummary {
        title: title.to_string(),
        year: Some("1999".to_string()),
        imdb_id: Some(format!("tt{:07}", title.len())),
        kind: Some("movie".to_string()),
        poster: Some("N/A".to_string()),
    }
}

/// Successful search page as OMDb sends it ("True")
pub fn search_page(titles: &[&str], total_results: Option<u64>) -> OmdbSearchResponse {
    OmdbSearchResponse {
        response: "True".to_string(),
        search: Some(titles.iter().map(|t| movie(t)).collect()),
        total_results,
        error: None,
    }
}

/// API-reported error ("False" with a message)
pub fn api_error(message: &str) -> OmdbSearchResponse {
    OmdbSearchResponse {
        response: "False".to_string(),
        search: None,
        total_results: None,
        error: Some(message.to_string()),
    }
}

pub fn details(imdb_id: &str, title: &str) -> MovieDetails {
    MovieDetails {
        response: "True".to_string(),
        imdb_id: Some(imdb_id.to_string()),
        title: Some(title.to_string()),
        year: Some("1999".to_string()),
        plot: Some("A long plot.".to_string()),
        ..MovieDetails::default()
    }
}
