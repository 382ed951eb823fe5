use crate::modules::omdb::MovieSummary;
use std::sync::{Mutex, PoisonError};

/// Movie picked from the list, handed over to the details view
#[derive(Default)]
pub struct SelectedMovieStore {
    selected: Mutex<Option<MovieSummary>>,
}

impl SelectedMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, movie: MovieSummary) {
        log::debug!("Selected movie '{}'", movie.title);
        *self.selected.lock().unwrap_or_else(PoisonError::into_inner) = Some(movie);
    }

    pub fn current(&self) -> Option<MovieSummary> {
        self.selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
