pub mod application;
pub mod domain;

pub use application::{
    MovieDetailsDto, MovieDetailsService, MoviesListDto, MoviesListService, SearchText,
};
pub use domain::SelectedMovieStore;
