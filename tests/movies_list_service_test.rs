//! Movies list view-model tests
//!
//! Debounce and teardown run on paused tokio time so every delay is exact.

mod utils;

use mockall::predicate::eq;
use moviefinder_lib::modules::device::{DeviceType, FixedDeviceDetector};
use moviefinder_lib::modules::movies::application::dto::GENERIC_FAILURE_MESSAGE;
use moviefinder_lib::modules::movies::{MoviesListService, SelectedMovieStore};
use moviefinder_lib::shared::errors::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::advance;
use tokio_test::{assert_err, assert_ok};
use utils::*;

fn build_service(
    omdb: Arc<ScriptedOmdb>,
    router: MockRouter,
    device: DeviceType,
) -> (Arc<MoviesListService>, Arc<SelectedMovieStore>) {
    let selection = Arc::new(SelectedMovieStore::new());
    let service = Arc::new(MoviesListService::new(
        omdb,
        Arc::new(FixedDeviceDetector(device)),
        Arc::new(router),
        Arc::clone(&selection),
    ));
    (service, selection)
}

fn desktop_service(omdb: Arc<ScriptedOmdb>) -> Arc<MoviesListService> {
    build_service(omdb, MockRouter::new(), DeviceType::Desktop).0
}

/// Type `term` and let the debounce window elapse
async fn type_and_wait(service: &MoviesListService, term: &str) {
    service.search_text().patch_value(term);
    settle().await;
    advance(Duration::from_millis(500)).await;
    settle().await;
}

#[tokio::test(start_paused = true)]
async fn test_search_fires_once_after_500ms() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));

    service.initialize();
    settle().await;
    service.search_text().patch_value("teste");
    settle().await;

    advance(Duration::from_millis(499)).await;
    settle().await;
    assert!(omdb.calls().is_empty());

    advance(Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(omdb.calls(), vec![("teste".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_no_search_after_destroy() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));

    service.initialize();
    settle().await;
    service.destroy();
    assert!(!service.is_observing());

    advance(Duration::from_millis(500)).await;
    type_and_wait(&service, "teste").await;
    advance(Duration::from_secs(5)).await;
    settle().await;

    assert!(omdb.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_destroy_drops_pending_debounce() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));

    service.initialize();
    settle().await;
    service.search_text().patch_value("teste");
    settle().await;
    advance(Duration::from_millis(300)).await;
    service.destroy();
    advance(Duration::from_millis(300)).await;
    settle().await;

    assert!(omdb.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_typing_coalesces_into_last_term() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));
    service.initialize();
    settle().await;

    for partial in ["O", "OP", "OPA"] {
        service.search_text().patch_value(partial);
        settle().await;
        advance(Duration::from_millis(200)).await;
        settle().await;
    }
    assert!(omdb.calls().is_empty());

    advance(Duration::from_millis(300)).await;
    settle().await;
    assert_eq!(omdb.calls(), vec![("OPA".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_typing_during_slow_search_gets_its_own_debounce() {
    let omdb = Arc::new(
        ScriptedOmdb::searching(|term, _| Ok(search_page(&[term], None)))
            .with_delay(Duration::from_millis(2000)),
    );
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();
    service.initialize();
    settle().await;

    type_and_wait(&service, "Alien").await;
    assert_eq!(omdb.calls(), vec![("Alien".to_string(), 1)]);

    advance(Duration::from_millis(100)).await;
    type_and_wait(&service, "Aliens").await;
    assert_eq!(
        omdb.calls(),
        vec![("Alien".to_string(), 1), ("Aliens".to_string(), 1)]
    );

    // "Alien" answers first and is superseded
    advance(Duration::from_millis(1500)).await;
    settle().await;
    assert!(updates.borrow().is_pending());

    advance(Duration::from_millis(500)).await;
    settle().await;
    assert_eq!(updates.borrow().movies[0].title, "Aliens");
}

#[tokio::test(start_paused = true)]
async fn test_destroy_drops_in_flight_search() {
    let omdb = Arc::new(
        ScriptedOmdb::searching(|term, _| Ok(search_page(&[term], Some(30))))
            .with_delay(Duration::from_millis(1000)),
    );
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();
    service.initialize();
    settle().await;

    type_and_wait(&service, "OPA").await;
    advance(Duration::from_millis(1000)).await;
    settle().await;
    assert!(updates.borrow().has_next);

    omdb.reset_calls();
    type_and_wait(&service, "Matrix").await;
    assert_eq!(omdb.calls().len(), 1);
    assert!(service.has_next());

    service.destroy();
    advance(Duration::from_secs(2)).await;
    settle().await;

    assert_eq!(omdb.calls().len(), 1);
    let dto = updates.borrow().clone();
    assert_eq!(dto.movies[0].title, "OPA");
    assert_eq!(dto.has_next, service.has_next());
}

#[tokio::test(start_paused = true)]
async fn test_show_more_waits_for_search_in_flight() {
    let omdb = Arc::new(
        ScriptedOmdb::searching(|term, _| Ok(search_page(&[term], Some(30))))
            .with_delay(Duration::from_millis(1000)),
    );
    let service = desktop_service(Arc::clone(&omdb));

    service.search("OPA", 1).await;
    assert!(service.has_next());
    service.initialize();
    settle().await;
    type_and_wait(&service, "Matrix").await;
    omdb.reset_calls();

    assert!(service.show_more().await.is_none());
    assert!(omdb.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_search_sends_typed_term_unchanged() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));
    service.initialize();
    settle().await;

    type_and_wait(&service, "OPA ").await;

    assert_eq!(omdb.calls(), vec![("OPA ".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_initialize_is_idempotent() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));

    service.initialize();
    service.initialize();
    settle().await;
    assert!(service.is_observing());

    type_and_wait(&service, "OPA").await;
    assert_eq!(omdb.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_search_maps_success() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], None)));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();
    assert!(updates.borrow().is_pending());

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;

    assert_eq!(omdb.calls(), vec![("OPA".to_string(), 1)]);
    let dto = updates.borrow().clone();
    assert_eq!(dto.response, "true");
    assert_eq!(dto.movies.len(), 1);
    assert_eq!(dto.movies[0].title, "Filme de teste");
    assert_eq!(dto.error, None);
    assert!(!dto.has_next);
    assert!(!service.has_next());
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_maps_to_negative_dto() {
    let omdb = Arc::new(ScriptedOmdb::searching(|_, _| {
        Err(AppError::ExternalServiceError(
            "Failed to connect to external service".to_string(),
        ))
    }));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;

    assert_eq!(omdb.calls().len(), 1);
    let dto = updates.borrow().clone();
    assert_eq!(dto.response, "false");
    assert_eq!(dto.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(dto.movies.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_api_error_maps_message() {
    let omdb = Arc::new(ScriptedOmdb::always(api_error("Algo deu errado")));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;

    assert_eq!(omdb.calls().len(), 1);
    let dto = updates.borrow().clone();
    assert_eq!(dto.response, "false");
    assert_eq!(dto.error.as_deref(), Some("Algo deu errado"));
    assert!(!service.has_next());
}

#[tokio::test(start_paused = true)]
async fn test_show_more_appends_next_page() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], Some(30))));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;
    assert!(service.has_next());

    omdb.reset_calls();
    let dto = service.show_more().await.expect("a second page is available");

    assert_eq!(omdb.calls(), vec![("OPA".to_string(), 2)]);
    assert!(service.has_next());
    assert_eq!(dto.movies.len(), 2);
    assert_eq!(dto.response, "true");
    assert_eq!(dto.page, 2);
    assert_eq!(*updates.borrow(), dto);
}

#[tokio::test(start_paused = true)]
async fn test_show_more_without_next_page_makes_no_call() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], Some(10))));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;

    omdb.reset_calls();
    assert!(service.show_more().await.is_none());

    assert!(omdb.calls().is_empty());
    assert!(!service.has_next());
    let dto = updates.borrow().clone();
    assert_eq!(dto.movies.len(), 1);
    assert_eq!(dto.response, "true");
}

#[tokio::test(start_paused = true)]
async fn test_new_term_resets_accumulation() {
    let omdb = Arc::new(ScriptedOmdb::searching(|term, _| {
        Ok(search_page(&[term], Some(30)))
    }));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;
    service.show_more().await;
    assert_eq!(updates.borrow().movies.len(), 2);

    type_and_wait(&service, "Matrix").await;

    let dto = updates.borrow().clone();
    assert_eq!(omdb.calls().last(), Some(&("Matrix".to_string(), 1)));
    assert_eq!(dto.page, 1);
    assert_eq!(dto.movies.len(), 1);
    assert_eq!(dto.movies[0].title, "Matrix");
}

#[tokio::test(start_paused = true)]
async fn test_blank_term_clears_without_call() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&["Filme de teste"], Some(30))));
    let service = desktop_service(Arc::clone(&omdb));
    let updates = service.movies_list_dto();

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;
    type_and_wait(&service, "   ").await;

    assert_eq!(omdb.calls().len(), 1);
    assert!(updates.borrow().is_pending());
    assert!(!service.has_next());
}

#[tokio::test(start_paused = true)]
async fn test_failed_second_page_keeps_first_page() {
    let omdb = Arc::new(ScriptedOmdb::searching(|_, page| match page {
        1 => Ok(search_page(&["Filme de teste"], Some(30))),
        _ => Err(AppError::RateLimitError("Too many requests".to_string())),
    }));
    let service = desktop_service(Arc::clone(&omdb));

    service.initialize();
    settle().await;
    type_and_wait(&service, "OPA").await;

    let dto = service.show_more().await.expect("a second page is available");
    assert_eq!(dto.response, "false");
    assert_eq!(dto.movies.len(), 1);
    assert!(!dto.has_next);
    assert!(service.show_more().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_show_more_requests_page_once() {
    let omdb = Arc::new(
        ScriptedOmdb::always(search_page(&["Filme de teste"], Some(30)))
            .with_delay(Duration::from_millis(100)),
    );
    let service = desktop_service(Arc::clone(&omdb));

    service.search("OPA", 1).await;
    omdb.reset_calls();

    let (first, second) = futures::join!(service.show_more(), service.show_more());

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(omdb.calls(), vec![("OPA".to_string(), 2)]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_results_are_discarded() {
    let omdb = Arc::new(
        ScriptedOmdb::searching(|term, _| Ok(search_page(&[term], None)))
            .with_delay(Duration::from_millis(100)),
    );
    let service = desktop_service(Arc::clone(&omdb));

    let (slow, fast) = futures::join!(service.search("Alien", 1), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        service.search("Aliens", 1).await
    });

    assert!(slow.is_pending());
    assert_eq!(fast.movies[0].title, "Aliens");
    assert_eq!(service.current_dto().movies[0].title, "Aliens");
}

#[tokio::test]
async fn test_desktop_navigation_on_desktop() {
    let mut router = MockRouter::new();
    router
        .expect_navigate()
        .with(eq(vec!["movies/details".to_string()]))
        .times(1)
        .returning(|_| Ok(()));
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&[], None)));
    let (service, _) = build_service(omdb, router, DeviceType::Desktop);

    let navigated = assert_ok!(service.desktop_navigate_to_movie(None));
    assert!(navigated);
}

#[tokio::test]
async fn test_desktop_navigation_skipped_off_desktop() {
    let mut router = MockRouter::new();
    router.expect_navigate().never();
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&[], None)));
    let (service, _) = build_service(omdb, router, DeviceType::Desktop);

    service.set_desktop(false);
    let navigated = assert_ok!(service.desktop_navigate_to_movie(None));
    assert!(!navigated);
}

#[tokio::test]
async fn test_mobile_navigation_always_fires() {
    let mut router = MockRouter::new();
    router
        .expect_navigate()
        .with(eq(vec!["movies/details".to_string()]))
        .times(1)
        .returning(|_| Ok(()));
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&[], None)));
    let (service, _) = build_service(omdb, router, DeviceType::Desktop);

    assert!(service.is_desktop());
    assert_ok!(service.mobile_navigate_to_movie(None));
}

#[tokio::test]
async fn test_device_seeds_desktop_flag() {
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&[], None)));
    let (mobile, _) = build_service(Arc::clone(&omdb), MockRouter::new(), DeviceType::Mobile);
    let (tablet, _) = build_service(omdb, MockRouter::new(), DeviceType::Tablet);

    assert!(!mobile.is_desktop());
    assert!(!tablet.is_desktop());
}

#[tokio::test]
async fn test_navigation_records_selected_movie() {
    let mut router = MockRouter::new();
    router.expect_navigate().times(1).returning(|_| Ok(()));
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&[], None)));
    let (service, selection) = build_service(omdb, router, DeviceType::Mobile);

    let chosen = movie("Heat");
    assert_ok!(service.mobile_navigate_to_movie(Some(&chosen)));
    assert_eq!(selection.current(), Some(chosen));
}

#[tokio::test]
async fn test_navigation_failure_is_returned() {
    let mut router = MockRouter::new();
    router
        .expect_navigate()
        .times(1)
        .returning(|_| Err(AppError::InvalidInput("bad route".to_string())));
    let omdb = Arc::new(ScriptedOmdb::always(search_page(&[], None)));
    let (service, _) = build_service(omdb, router, DeviceType::Desktop);

    assert_err!(service.desktop_navigate_to_movie(None));
}
