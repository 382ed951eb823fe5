pub mod http_client;
pub mod omdb_client;

pub use http_client::RateLimitClient;
pub use omdb_client::OmdbClient;
