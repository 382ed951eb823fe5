use crate::log_debug;
use crate::modules::movies::application::dto::{MovieDetailsDto, GENERIC_FAILURE_MESSAGE};
use crate::modules::movies::domain::SelectedMovieStore;
use crate::modules::navigation::{routes, Navigator};
use crate::modules::omdb::OmdbService;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use std::sync::Arc;
use tokio::sync::watch;

pub const NO_SELECTION_MESSAGE: &str = "No movie selected";
pub const MISSING_ID_MESSAGE: &str = "The selected movie has no IMDb id";

/// View-model behind the details view
pub struct MovieDetailsService {
    omdb: Arc<dyn OmdbService>,
    router: Arc<dyn Navigator>,
    selection: Arc<SelectedMovieStore>,
    dto: watch::Sender<MovieDetailsDto>,
}

impl MovieDetailsService {
    pub fn new(
        omdb: Arc<dyn OmdbService>,
        router: Arc<dyn Navigator>,
        selection: Arc<SelectedMovieStore>,
    ) -> Self {
        let (dto, _) = watch::channel(MovieDetailsDto::default());
        Self {
            omdb,
            router,
            selection,
            dto,
        }
    }

    pub fn movie_details_dto(&self) -> watch::Receiver<MovieDetailsDto> {
        self.dto.subscribe()
    }

    /// Load the full record of the selected movie
    pub async fn load(&self) -> MovieDetailsDto {
        let dto = self.fetch_selected().await;
        self.dto.send_replace(dto.clone());
        dto
    }

    /// Return to the list
    pub fn back(&self) -> AppResult<()> {
        self.router.navigate(routes::commands(routes::MOVIES))?;
        LogContext::navigation(routes::MOVIES, "any", true);
        Ok(())
    }

    async fn fetch_selected(&self) -> MovieDetailsDto {
        let Some(selected) = self.selection.current() else {
            log_debug!("Details: nothing selected");
            return MovieDetailsDto::failure(NO_SELECTION_MESSAGE);
        };
        let Some(imdb_id) = selected.imdb_id.as_deref().filter(|id| !id.trim().is_empty()) else {
            log_debug!("Details: '{}' has no IMDb id", selected.title);
            return MovieDetailsDto::failure(MISSING_ID_MESSAGE);
        };

        match self.omdb.find_by_id(imdb_id).await {
            Ok(details) if details.is_success() => MovieDetailsDto::success(details),
            Ok(details) => MovieDetailsDto::failure(
                details
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            ),
            Err(err) => {
                LogContext::recovered_failure(&err, &format!("Details for '{}' failed", imdb_id));
                MovieDetailsDto::failure(GENERIC_FAILURE_MESSAGE)
            }
        }
    }
}
