pub mod dto;
pub mod movie_details_service;
pub mod movies_list_service;
pub mod search_text;

pub use dto::{MovieDetailsDto, MoviesListDto};
pub use movie_details_service::MovieDetailsService;
pub use movies_list_service::MoviesListService;
pub use search_text::SearchText;
