//! Search view-model for the movies list
//!
//! Watches the search box, waits for typing to settle, asks OMDb for the
//! term and publishes a `MoviesListDto` for the UI. Pages are fetched on
//! demand and appended to the current session.
//!
//! The shown results only change when a response is applied, so the DTO
//! stream and `has_next` agree while a request is in flight.

use crate::modules::device::DeviceDetector;
use crate::modules::movies::application::dto::{MoviesListDto, GENERIC_FAILURE_MESSAGE};
use crate::modules::movies::application::search_text::SearchText;
use crate::modules::movies::domain::SelectedMovieStore;
use crate::modules::navigation::{routes, Navigator};
use crate::modules::omdb::{MovieSummary, OmdbSearchResponse, OmdbService};
use crate::shared::application::PageWindow;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// State of the search currently shown
#[derive(Debug, Default)]
struct SearchSession {
    term: String,
    window: PageWindow,
    movies: Vec<MovieSummary>,
    /// Bumped by every request; only the latest one may be applied
    generation: u64,
    pending_page: Option<u32>,
}

impl SearchSession {
    fn begin(&mut self, page: u32) -> u64 {
        self.generation += 1;
        self.pending_page = Some(page);
        self.generation
    }

    /// Forget the request in flight, if any
    fn abandon(&mut self) {
        if self.pending_page.take().is_some() {
            self.generation += 1;
        }
    }

    fn clear(&mut self) {
        self.term.clear();
        self.window.reset();
        self.movies.clear();
        self.generation += 1;
        self.pending_page = None;
    }

    fn apply(
        &mut self,
        term: &str,
        page: u32,
        outcome: AppResult<OmdbSearchResponse>,
    ) -> MoviesListDto {
        self.pending_page = None;
        if page <= 1 || self.term != term {
            self.term = term.to_string();
            self.window.reset();
            self.movies.clear();
        }
        match outcome {
            Ok(response) if response.is_success() => {
                self.movies.extend(response.search.unwrap_or_default());
                self.window.loaded(page, response.total_results);
                MoviesListDto::success(&response.response, self.movies.clone(), &self.window)
            }
            Ok(response) => {
                let message = response
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
                log_info!("Search: OMDb refused '{}' page {}: {}", self.term, page, message);
                self.fail(page, message)
            }
            Err(err) => {
                LogContext::recovered_failure(
                    &err,
                    &format!("Search for '{}' page {} failed", self.term, page),
                );
                self.fail(page, GENERIC_FAILURE_MESSAGE.to_string())
            }
        }
    }

    // Earlier pages stay visible; paging stops until the user types again.
    fn fail(&mut self, page: u32, message: String) -> MoviesListDto {
        if page <= 1 {
            self.movies.clear();
            self.window.loaded(1, None);
        } else {
            self.window.total_results = None;
        }
        MoviesListDto::failure(message, self.movies.clone(), self.window.page)
    }
}

struct Observer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// View-model behind the movies list
pub struct MoviesListService {
    omdb: Arc<dyn OmdbService>,
    router: Arc<dyn Navigator>,
    selection: Arc<SelectedMovieStore>,
    search_text: SearchText,
    dto: watch::Sender<MoviesListDto>,
    session: Mutex<SearchSession>,
    is_desktop: AtomicBool,
    debounce: Duration,
    observer: Mutex<Option<Observer>>,
}

impl MoviesListService {
    pub fn new(
        omdb: Arc<dyn OmdbService>,
        device: Arc<dyn DeviceDetector>,
        router: Arc<dyn Navigator>,
        selection: Arc<SelectedMovieStore>,
    ) -> Self {
        let (dto, _) = watch::channel(MoviesListDto::empty());
        Self {
            omdb,
            router,
            selection,
            search_text: SearchText::new(),
            dto,
            session: Mutex::new(SearchSession::default()),
            is_desktop: AtomicBool::new(device.is_desktop()),
            debounce: DEFAULT_DEBOUNCE,
            observer: Mutex::new(None),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn search_text(&self) -> &SearchText {
        &self.search_text
    }

    /// Stream of list states; starts with an empty DTO
    pub fn movies_list_dto(&self) -> watch::Receiver<MoviesListDto> {
        self.dto.subscribe()
    }

    pub fn current_dto(&self) -> MoviesListDto {
        self.dto.borrow().clone()
    }

    pub fn has_next(&self) -> bool {
        self.session().window.has_next()
    }

    pub fn is_desktop(&self) -> bool {
        self.is_desktop.load(Ordering::Relaxed)
    }

    pub fn set_desktop(&self, is_desktop: bool) {
        self.is_desktop.store(is_desktop, Ordering::Relaxed);
    }

    pub fn is_observing(&self) -> bool {
        self.observer().is_some()
    }

    /// Start observing the search box; a second call while observing is a no-op
    ///
    /// Must be called from within a tokio runtime.
    pub fn initialize(self: &Arc<Self>) {
        let mut observer = self.observer();
        if observer.is_some() {
            log_debug!("Movies list already observing the search box");
            return;
        }

        let token = CancellationToken::new();
        let handle = tokio::spawn(observe_search_text(
            Arc::downgrade(self),
            self.search_text.value_changes(),
            token.clone(),
            self.debounce,
        ));
        *observer = Some(Observer { token, handle });
        log_debug!("Movies list observing the search box ({:?} debounce)", self.debounce);
    }

    /// Stop observing; pending timers and in-flight searches are dropped
    pub fn destroy(&self) {
        if let Some(observer) = self.observer().take() {
            observer.token.cancel();
            observer.handle.abort();
            self.session().abandon();
            log_debug!("Movies list stopped observing the search box");
        }
    }

    /// Query OMDb for `term` at `page` and publish the mapped DTO
    ///
    /// Page 1, or a term other than the current one, starts a new session
    /// once the response arrives. A newer request supersedes this one.
    /// Failures come back as a negative DTO, never as an error.
    pub async fn search(&self, term: &str, page: u32) -> MoviesListDto {
        let page = page.max(1);
        let generation = self.session().begin(page);

        let outcome = self.omdb.search_for(term, page).await;

        let dto = {
            let mut session = self.session();
            if session.generation != generation {
                log_debug!("Search: discarding stale results for '{}' page {}", term, page);
                return self.current_dto();
            }
            session.apply(term, page, outcome)
        };

        self.dto.send_replace(dto.clone());
        dto
    }

    /// Fetch the next page when the API reported more results
    ///
    /// Returns `None` without calling OMDb when there is nothing more to load
    /// or another request is still on its way.
    pub async fn show_more(&self) -> Option<MoviesListDto> {
        let (term, page) = {
            let session = self.session();
            if !session.window.has_next() || session.pending_page.is_some() {
                log_debug!("Search: no further page for '{}' yet", session.term);
                return None;
            }
            (session.term.clone(), session.window.next_page())
        };
        Some(self.search(&term, page).await)
    }

    /// Open the details view from the desktop layout; ignored on other devices
    pub fn desktop_navigate_to_movie(&self, item: Option<&MovieSummary>) -> AppResult<bool> {
        if !self.is_desktop() {
            LogContext::navigation(routes::MOVIES_DETAILS, "not desktop", false);
            return Ok(false);
        }
        self.open_details(item, "desktop")?;
        Ok(true)
    }

    /// Open the details view from the mobile layout
    pub fn mobile_navigate_to_movie(&self, item: Option<&MovieSummary>) -> AppResult<()> {
        self.open_details(item, "mobile")
    }

    fn open_details(&self, item: Option<&MovieSummary>, device: &str) -> AppResult<()> {
        if let Some(movie) = item {
            self.selection.select(movie.clone());
        }
        self.router
            .navigate(routes::commands(routes::MOVIES_DETAILS))?;
        LogContext::navigation(routes::MOVIES_DETAILS, device, true);
        Ok(())
    }

    async fn search_term_changed(&self, term: String) {
        if term.trim().is_empty() {
            self.session().clear();
            self.dto.send_replace(MoviesListDto::empty());
            log_debug!("Search: cleared");
            return;
        }
        self.search(&term, 1).await;
    }

    fn session(&self) -> MutexGuard<'_, SearchSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn observer(&self) -> MutexGuard<'_, Option<Observer>> {
        self.observer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for MoviesListService {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Debounced observation of the search box
///
/// Searches run as child tasks so typing keeps being watched while OMDb
/// answers. Dropping the task set aborts them.
async fn observe_search_text(
    service: Weak<MoviesListService>,
    mut changes: watch::Receiver<String>,
    token: CancellationToken,
    debounce: Duration,
) {
    let mut searches = JoinSet::new();
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            changed = changes.changed() => {
                if changed.is_err() {
                    return;
                }
            }
        }

        // Every further change restarts the quiet period
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => return,
                changed = changes.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        let term = changes.borrow_and_update().clone();
        let Some(view_model) = service.upgrade() else {
            return;
        };
        while searches.try_join_next().is_some() {}
        let search_token = token.child_token();
        searches.spawn(async move {
            tokio::select! {
                biased;
                _ = search_token.cancelled() => {}
                _ = view_model.search_term_changed(term) => {}
            }
        });
    }
}
