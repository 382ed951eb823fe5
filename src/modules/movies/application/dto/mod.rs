pub mod movie_details_dto;
pub mod movies_list_dto;

pub use movie_details_dto::MovieDetailsDto;
pub use movies_list_dto::MoviesListDto;

/// Message shown when the lookup fails without an API-provided reason
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while talking to OMDb. Please try again.";

pub const RESPONSE_TRUE: &str = "true";
pub const RESPONSE_FALSE: &str = "false";
