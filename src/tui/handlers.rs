//! Async handler factories for the movie browser
//!
//! Factory functions accept `&mut Hooks` as their first parameter so they can
//! call `hooks.use_async_handler()` internally. All fetch handlers carry a
//! [`RequestToken`]; a response is applied only when its token is still the
//! newest one issued, so slow responses never clobber newer ones.

use iocraft::hooks::UseAsyncHandler;
use iocraft::prelude::{Handler, Hooks, State};

use crate::api::{CatalogQuery, MovieDetail, MovieDraft, MovieService, MovieSummary};
use crate::api::http::HttpMovieService;
use crate::config::Config;
use crate::error::MarqueeError;
use crate::filters::FilterState;
use crate::tui::components::Toast;
use crate::tui::edit::FormOutcome;
use crate::tui::fetch::{DebounceGate, FetchError, FetchPhase, RequestToken, RequestTracker};
use crate::tui::view::model::BrowseState;

/// Factory for creating the catalog fetch handler
///
/// The caller issues the token and flips the catalog phase to Loading
/// before invoking the handler; this keeps issuance synchronous with the
/// keystroke that caused the fetch.
pub fn create_catalog_fetch_handler(
    hooks: &mut Hooks,
    state: &State<BrowseState>,
    tracker: &State<RequestTracker>,
) -> Handler<(RequestToken, FilterState)> {
    let state = *state;
    let tracker = *tracker;

    hooks.use_async_handler(move |(token, filters): (RequestToken, FilterState)| {
        let mut state = state;
        let tracker = tracker;

        async move {
            let result = load_catalog(&filters).await;

            // A newer request has superseded this one
            if !tracker.read().is_current(token) {
                tracing::debug!(?token, "discarding stale catalog response");
                return;
            }

            let mut next = state.read().clone();
            match result {
                Ok(movies) => {
                    next.movies = movies;
                    next.catalog_phase = FetchPhase::Loaded;
                    if next.selected_index >= next.movies.len() {
                        next.selected_index = next.movies.len().saturating_sub(1);
                        next.scroll_offset = 0;
                    }
                }
                Err(error) => {
                    next.movies.clear();
                    next.selected_index = 0;
                    next.scroll_offset = 0;
                    next.catalog_phase = FetchPhase::Failed(error);
                }
            }
            state.set(next);
        }
    })
}

/// Factory for creating the debounced search fetch handler
///
/// Each keystroke arms the [`DebounceGate`] and invokes this handler with
/// the epoch it received. The handler waits out the quiet window and only
/// proceeds if the epoch is still current; later keystrokes re-arm the
/// gate and immediate fetches cancel it, so at most one fetch fires per
/// burst of typing and never with superseded filters.
pub fn create_debounced_search_handler(
    hooks: &mut Hooks,
    state: &State<BrowseState>,
    tracker: &State<RequestTracker>,
    gate: &State<DebounceGate>,
    fetch_handler: &Handler<(RequestToken, FilterState)>,
    debounce_ms: u64,
) -> Handler<(u64, FilterState)> {
    let state = *state;
    let tracker = *tracker;
    let gate = *gate;
    let fetch_handler = fetch_handler.clone();

    hooks.use_async_handler(move |(epoch, filters): (u64, FilterState)| {
        let mut state = state;
        let mut tracker = tracker;
        let gate = gate;
        let fetch_handler = fetch_handler.clone();

        async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(debounce_ms)).await;

            // A newer filter change owns the fetch now
            if !gate.read().may_fire(epoch) {
                return;
            }

            let token = {
                let mut t = *tracker.read();
                let token = t.issue();
                tracker.set(t);
                token
            };

            let mut next = state.read().clone();
            next.catalog_phase = FetchPhase::Loading;
            state.set(next);

            fetch_handler((token, filters));
        }
    })
}

/// Factory for creating the detail fetch handler
pub fn create_detail_fetch_handler(
    hooks: &mut Hooks,
    state: &State<BrowseState>,
    tracker: &State<RequestTracker>,
) -> Handler<(RequestToken, String)> {
    let state = *state;
    let tracker = *tracker;

    hooks.use_async_handler(move |(token, movie_id): (RequestToken, String)| {
        let mut state = state;
        let tracker = tracker;

        async move {
            let result = load_detail(&movie_id).await;

            if !tracker.read().is_current(token) {
                tracing::debug!(?token, %movie_id, "discarding stale detail response");
                return;
            }

            let mut next = state.read().clone();
            match result {
                Ok(detail) => {
                    next.detail = Some(detail);
                    next.detail_phase = FetchPhase::Loaded;
                }
                Err(error) => {
                    next.detail = None;
                    next.detail_phase = FetchPhase::Failed(error);
                }
            }
            state.set(next);
        }
    })
}

/// Factory for creating the save handler backing the movie form
///
/// The form validates and emits the draft; this handler persists it. A
/// failure is reported into the form's error slot so the dialog stays
/// open with input preserved.
pub fn create_save_handler(
    hooks: &mut Hooks,
    outcome: &State<FormOutcome>,
    saved_id: &State<String>,
    save_error: &State<String>,
    is_saving: &State<bool>,
) -> Handler<MovieDraft> {
    let outcome = *outcome;
    let saved_id = *saved_id;
    let save_error = *save_error;
    let is_saving = *is_saving;

    hooks.use_async_handler(move |draft: MovieDraft| {
        let mut outcome = outcome;
        let mut saved_id = saved_id;
        let mut save_error = save_error;
        let mut is_saving = is_saving;

        async move {
            let result = save_movie(&draft).await;

            is_saving.set(false);

            match result {
                Ok(saved) => {
                    saved_id.set(saved.id);
                    outcome.set(FormOutcome::Saved);
                }
                Err(message) => {
                    save_error.set(format!("Save failed: {message}"));
                }
            }
        }
    })
}

/// Factory for creating the delete handler
///
/// On success the confirmation modal is closed, the movie disappears from
/// the grid, and the browser returns to the grid screen.
pub fn create_delete_handler(
    hooks: &mut Hooks,
    state: &State<BrowseState>,
) -> Handler<(String, String)> {
    let state = *state;

    hooks.use_async_handler(move |(movie_id, title): (String, String)| {
        let mut state = state;

        async move {
            let result = delete_movie(&movie_id).await;

            let mut next = state.read().clone();
            next.modal = None;
            match result {
                Ok(()) => {
                    next.movies.retain(|m| m.id != movie_id);
                    if next.selected_index >= next.movies.len() {
                        next.selected_index = next.movies.len().saturating_sub(1);
                    }
                    next.location = next.location.to_browse();
                    next.detail = None;
                    next.detail_phase = FetchPhase::Idle;
                    next.toast = Some(Toast::success(format!("Deleted \"{title}\"")));
                }
                Err(message) => {
                    next.toast = Some(Toast::error(format!("Delete failed: {message}")));
                }
            }
            state.set(next);
        }
    })
}

/// Fetch the catalog for the given filters
async fn load_catalog(filters: &FilterState) -> Result<Vec<MovieSummary>, FetchError> {
    let (service, timeout) = service_from_config().map_err(FetchError::Unavailable)?;
    let query = CatalogQuery::from_filters(filters);

    match tokio::time::timeout(timeout, service.fetch_movies(&query)).await {
        Ok(result) => result.map_err(to_fetch_error),
        Err(_) => Err(timeout_error(timeout)),
    }
}

/// Fetch a single movie by id
async fn load_detail(movie_id: &str) -> Result<MovieDetail, FetchError> {
    let (service, timeout) = service_from_config().map_err(FetchError::Unavailable)?;

    match tokio::time::timeout(timeout, service.fetch_movie(movie_id)).await {
        Ok(result) => result.map_err(to_fetch_error),
        Err(_) => Err(timeout_error(timeout)),
    }
}

/// Persist the draft as a create or update, depending on the id
async fn save_movie(draft: &MovieDraft) -> Result<MovieDetail, String> {
    let (service, timeout) = service_from_config()?;

    let save = async {
        if draft.id.is_some() {
            service.update_movie(draft).await
        } else {
            service.create_movie(draft).await
        }
    };

    match tokio::time::timeout(timeout, save).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err(format!("request timed out after {} seconds", timeout.as_secs())),
    }
}

/// Delete a movie by id
async fn delete_movie(movie_id: &str) -> Result<(), String> {
    let (service, timeout) = service_from_config()?;

    match tokio::time::timeout(timeout, service.delete_movie(movie_id)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err(format!("request timed out after {} seconds", timeout.as_secs())),
    }
}

fn to_fetch_error(error: MarqueeError) -> FetchError {
    match error {
        MarqueeError::MovieNotFound(_) => FetchError::NotFound,
        other => FetchError::Unavailable(other.to_string()),
    }
}

fn timeout_error(timeout: std::time::Duration) -> FetchError {
    FetchError::Unavailable(format!(
        "request timed out after {} seconds",
        timeout.as_secs()
    ))
}

fn service_from_config() -> Result<(HttpMovieService, std::time::Duration), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let service = HttpMovieService::from_config(&config).map_err(|e| e.to_string())?;
    // Outer deadline sits above the client timeout so the client reports first
    let timeout = std::time::Duration::from_secs(config.request_timeout + 2);
    Ok((service, timeout))
}
