pub mod selected_movie;

pub use selected_movie::SelectedMovieStore;
