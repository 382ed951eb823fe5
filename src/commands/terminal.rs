//! Terminal front end for the movie search
//!
//! Lines typed on stdin feed the search box; list updates are printed as
//! the view-model publishes them.

use crate::commands::console_command::ConsoleCommand;
use crate::modules::device::{DeviceDetector, UserAgentDeviceDetector};
use crate::modules::movies::{
    MovieDetailsDto, MovieDetailsService, MoviesListDto, MoviesListService, SelectedMovieStore,
};
use crate::modules::navigation::{routes, HistoryRouter};
use crate::modules::omdb::{domain::known, OmdbClient, OmdbService};
use crate::shared::application::{PageWindow, OMDB_PAGE_SIZE};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::log_info;
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Render the list view
pub fn render_list(dto: &MoviesListDto) -> String {
    let mut out = String::new();
    if dto.is_pending() {
        return out;
    }
    if !dto.is_success() {
        let _ = writeln!(
            out,
            "No results: {}",
            dto.error.as_deref().unwrap_or("unknown error")
        );
        if dto.movies.is_empty() {
            return out;
        }
    }

    for (index, movie) in dto.movies.iter().enumerate() {
        let _ = write!(out, "{:>3}. {}", index + 1, movie.title);
        if let Some(year) = known(&movie.year) {
            let _ = write!(out, " ({})", year);
        }
        if let Some(kind) = known(&movie.kind) {
            let _ = write!(out, " [{}]", kind);
        }
        out.push('\n');
    }

    if let Some(total) = dto.total_results {
        let window = PageWindow {
            page: dto.page,
            page_size: OMDB_PAGE_SIZE,
            total_results: Some(total),
        };
        let _ = write!(
            out,
            "Page {} of {} ({} shown, {} found)",
            dto.page,
            window.total_pages(),
            dto.movies.len(),
            total
        );
        if dto.has_next {
            out.push_str(" - :more for the next page");
        }
        out.push('\n');
    }
    out
}

/// Render the details view
pub fn render_details(dto: &MovieDetailsDto) -> String {
    let mut out = String::new();
    let Some(movie) = dto.movie.as_ref().filter(|_| dto.is_success()) else {
        let _ = writeln!(
            out,
            "Details unavailable: {}",
            dto.error.as_deref().unwrap_or("unknown error")
        );
        return out;
    };

    let title = known(&movie.title).unwrap_or("Untitled");
    match known(&movie.year) {
        Some(year) => {
            let _ = writeln!(out, "{} ({})", title, year);
        }
        None => {
            let _ = writeln!(out, "{}", title);
        }
    }

    let fields = [
        ("Rated", &movie.rated),
        ("Runtime", &movie.runtime),
        ("Genre", &movie.genre),
        ("Director", &movie.director),
        ("Actors", &movie.actors),
        ("IMDb rating", &movie.imdb_rating),
        ("Plot", &movie.plot),
    ];
    for (label, value) in fields {
        if let Some(value) = known(value) {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
    }
    for rating in &movie.ratings {
        let _ = writeln!(out, "  {}: {}", rating.source, rating.value);
    }
    out
}

/// Wire the services and drive them from stdin until `:quit` or EOF
pub async fn run_terminal(config: AppConfig) -> AppResult<()> {
    let omdb: Arc<dyn OmdbService> = Arc::new(OmdbClient::from_config(&config)?);
    let device: Arc<dyn DeviceDetector> =
        Arc::new(UserAgentDeviceDetector::new(config.device_user_agent.clone()));
    let router = Arc::new(HistoryRouter::new(routes::MOVIES));
    let selection = Arc::new(SelectedMovieStore::new());

    let list = Arc::new(
        MoviesListService::new(
            Arc::clone(&omdb),
            Arc::clone(&device),
            router.clone(),
            Arc::clone(&selection),
        )
        .with_debounce(config.search_debounce),
    );
    let details = MovieDetailsService::new(omdb, router.clone(), selection);

    list.initialize();
    log_info!("Movie search ready ({} client)", device.device_type());
    println!("{}", ConsoleCommand::help());

    let mut list_updates = list.movies_list_dto();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = list_updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let dto = list_updates.borrow_and_update().clone();
                print!("{}", render_list(&dto));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match ConsoleCommand::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match command {
                    ConsoleCommand::Search(text) => list.search_text().patch_value(text),
                    ConsoleCommand::More => {
                        if list.show_more().await.is_none() {
                            println!("No more results");
                        }
                    }
                    ConsoleCommand::Open(position) => {
                        let current = list.current_dto();
                        let Some(movie) = current.movies.get(position - 1) else {
                            println!("No movie at position {}", position);
                            continue;
                        };
                        let navigated = if list.is_desktop() {
                            list.desktop_navigate_to_movie(Some(movie))
                        } else {
                            list.mobile_navigate_to_movie(Some(movie)).map(|_| true)
                        };
                        match navigated {
                            Ok(true) => {
                                print!("{}", render_details(&details.load().await));
                                println!("({})", router.current_url());
                            }
                            Ok(false) => println!("Details are not available on this device"),
                            Err(e) => LogContext::error_with_context(&e, "Navigation failed"),
                        }
                    }
                    ConsoleCommand::Back => match details.back() {
                        Ok(()) => print!("{}", render_list(&list.current_dto())),
                        Err(e) => LogContext::error_with_context(&e, "Navigation failed"),
                    },
                    ConsoleCommand::Help => println!("{}", ConsoleCommand::help()),
                    ConsoleCommand::Quit => break,
                }
            }
        }
    }

    list.destroy();
    log_info!("Movie search closed");
    Ok(())
}
