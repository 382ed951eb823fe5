pub mod models;
pub mod omdb_service;

pub use models::*;
pub use omdb_service::OmdbService;
