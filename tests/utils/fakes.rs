/// Hand-written fakes and mocks for the service ports
use async_trait::async_trait;
use mockall::mock;
use moviefinder_lib::modules::navigation::Navigator;
use moviefinder_lib::modules::omdb::{MovieDetails, OmdbSearchResponse, OmdbService};
use moviefinder_lib::shared::errors::{AppError, AppResult};
use std::sync::Mutex;
use std::time::Duration;

type SearchResponder = Box<dyn Fn(&str, u32) -> AppResult<OmdbSearchResponse> + Send + Sync>;
type DetailsResponder = Box<dyn Fn(&str) -> AppResult<MovieDetails> + Send + Sync>;

/// OMDb fake that answers from closures and records every call
pub struct ScriptedOmdb {
    search: SearchResponder,
    details: DetailsResponder,
    delay: Option<Duration>,
    search_calls: Mutex<Vec<(String, u32)>>,
    details_calls: Mutex<Vec<String>>,
}

impl ScriptedOmdb {
    pub fn searching<F>(responder: F) -> Self
    where
        F: Fn(&str, u32) -> AppResult<OmdbSearchResponse> + Send + Sync + 'static,
    {
        Self {
            search: Box::new(responder),
            details: Box::new(|id: &str| Err(AppError::NotFound(id.to_string()))),
            delay: None,
            search_calls: Mutex::new(Vec::new()),
            details_calls: Mutex::new(Vec::new()),
        }
    }

    /// Fake whose search always returns the same response
    pub fn always(response: OmdbSearchResponse) -> Self {
        Self::searching(move |_, _| Ok(response.clone()))
    }

    pub fn with_details<F>(mut self, responder: F) -> Self
    where
        F: Fn(&str) -> AppResult<MovieDetails> + Send + Sync + 'static,
    {
        self.details = Box::new(responder);
        self
    }

    /// Answer only after `delay` (tokio time)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn reset_calls(&self) {
        self.search_calls.lock().unwrap().clear();
    }

    pub fn details_calls(&self) -> Vec<String> {
        self.details_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OmdbService for ScriptedOmdb {
    async fn search_for(&self, term: &str, page: u32) -> AppResult<OmdbSearchResponse> {
        self.search_calls
            .lock()
            .unwrap()
            .push((term.to_string(), page));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.search)(term, page)
    }

    async fn find_by_id(&self, imdb_id: &str) -> AppResult<MovieDetails> {
        self.details_calls.lock().unwrap().push(imdb_id.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.details)(imdb_id)
    }
}

mock! {
    pub Router {}

    impl Navigator for Router {
        fn navigate(&self, commands: Vec<String>) -> AppResult<()>;
    }
}
