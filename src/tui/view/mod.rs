//! Movie browser view (`marquee browse`)
//!
//! Interactive TUI for browsing the catalog with search, genre tabs,
//! sorting, a detail screen, and create/edit/delete flows.
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | Header                                   |
//! +------------------------------------------+
//! | SearchBox                                |
//! +------------------------------------------+
//! | GenreTabs                  | Sort        |
//! +------------------------------------------+
//! | MovieGrid / EmptyState / MovieDetail     |
//! |                                          |
//! +------------------------------------------+
//! | Footer                                   |
//! +------------------------------------------+
//! ```

pub mod model;

use std::sync::{Arc, Mutex};

use iocraft::prelude::*;

use crate::api::MovieDraft;
use crate::filters::{FilterState, SortKey, SortOrder};
use crate::location::{Location, Route};
use crate::tui::components::{
    EmptyState, Footer, GenreTabs, Header, MovieDetailPanel, MovieGrid, SearchBox, Select, Toast,
    grid_columns, grid_rows, options_for, render_toast,
};
use crate::tui::confirm::DeleteConfirmModal;
use crate::tui::edit::{FormOutcome, MovieForm};
use crate::tui::fetch::{DebounceGate, FetchPhase, RequestToken, RequestTracker};
use crate::tui::handlers::{
    create_catalog_fetch_handler, create_debounced_search_handler, create_delete_handler,
    create_detail_fetch_handler, create_save_handler,
};
use crate::tui::state::Pane;
use crate::tui::theme::theme;
use model::{
    BrowseAction, BrowseState, Modal, key_to_action, compute_view_model, reduce_browse_state,
};

/// Rows of chrome around the grid: header, search box, genre tabs,
/// footer, and the grid border
const CHROME_HEIGHT: u16 = 10;

/// Props for the MovieBrowser component
#[derive(Default, Props)]
pub struct MovieBrowserProps {
    /// Location to open at, for deep links
    pub initial_location: Option<Location>,
    /// Quiet window before a typed query is sent, in milliseconds
    pub debounce_ms: Option<u64>,
    /// Receives the current location so the caller can print it on exit
    pub exit_location: Option<Arc<Mutex<String>>>,
}

/// Main movie browser component
#[component]
pub fn MovieBrowser<'a>(props: &MovieBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial_location = props.initial_location.clone().unwrap_or_default();
    let debounce_ms = props.debounce_ms.unwrap_or(300);

    // State management
    let mut state: State<BrowseState> = hooks.use_state(|| BrowseState {
        location: initial_location.clone(),
        ..Default::default()
    });
    let mut catalog_tracker: State<RequestTracker> = hooks.use_state(RequestTracker::new);
    let mut detail_tracker: State<RequestTracker> = hooks.use_state(RequestTracker::new);
    let mut debounce_gate: State<DebounceGate> = hooks.use_state(DebounceGate::new);
    let mut search_input = hooks.use_state(|| initial_location.filters.query.clone());
    let mut should_exit = hooks.use_state(|| false);
    let mut did_init = hooks.use_state(|| false);

    // Form state; the form emits a draft, the browser persists it
    let mut form_outcome: State<FormOutcome> = hooks.use_state(FormOutcome::default);
    let mut saved_id = hooks.use_state(String::new);
    let mut submitted_draft: State<Option<MovieDraft>> = hooks.use_state(|| None);
    let mut save_error = hooks.use_state(String::new);
    let mut is_saving = hooks.use_state(|| false);

    // Async handlers
    let catalog_fetch = create_catalog_fetch_handler(&mut hooks, &state, &catalog_tracker);
    let debounced_search = create_debounced_search_handler(
        &mut hooks,
        &state,
        &catalog_tracker,
        &debounce_gate,
        &catalog_fetch,
        debounce_ms,
    );
    let detail_fetch = create_detail_fetch_handler(&mut hooks, &state, &detail_tracker);
    let delete_handler = create_delete_handler(&mut hooks, &state);
    let save_handler =
        create_save_handler(&mut hooks, &form_outcome, &saved_id, &save_error, &is_saving);

    // Grid geometry from the terminal size
    let columns = grid_columns(width);
    let visible_rows = grid_rows(height.saturating_sub(CHROME_HEIGHT) as usize);

    // Initial fetches for the deep-linked location
    if !did_init.get() {
        did_init.set(true);

        let filters = state.read().location.filters.clone();
        start_catalog_fetch(
            &mut state,
            &mut catalog_tracker,
            &mut debounce_gate,
            &catalog_fetch,
            filters,
        );

        let route = state.read().location.route.clone();
        match route {
            Route::Detail(id) | Route::Edit(id) => {
                start_detail_fetch(&mut state, &mut detail_tracker, &detail_fetch, id);
            }
            Route::New => {
                let mut next = state.read().clone();
                next.modal = Some(Modal::Form { movie_id: None });
                state.set(next);
            }
            Route::Browse => {}
        }
    }

    // A deep-linked edit opens the form once the record has arrived
    {
        let current = state.read().clone();
        if let Route::Edit(id) = &current.location.route
            && current.modal.is_none()
            && current.detail.as_ref().map(|d| d.id.as_str()) == Some(id.as_str())
        {
            let mut next = current.clone();
            next.modal = Some(Modal::Form {
                movie_id: Some(id.clone()),
            });
            state.set(next);
        }
    }

    // Sync typed input with the location query. A divergence while the
    // search pane has focus is a keystroke; otherwise the location changed
    // underneath the box and the box follows it.
    {
        let current = state.read().clone();
        let typed = search_input.to_string();
        if typed != current.location.filters.query {
            if current.active_pane == Pane::Search && current.modal.is_none() {
                let epoch = {
                    let mut gate = *debounce_gate.read();
                    let epoch = gate.arm();
                    debounce_gate.set(gate);
                    epoch
                };

                let next = reduce_browse_state(
                    current,
                    BrowseAction::UpdateSearch(typed),
                    columns,
                    visible_rows,
                );
                let filters = next.location.filters.clone();
                state.set(next);
                debounced_search((epoch, filters));
            } else {
                search_input.set(current.location.filters.query.clone());
            }
        }
    }

    // Persist a draft submitted by the form
    {
        let draft = submitted_draft.read().clone();
        if let Some(draft) = draft {
            submitted_draft.set(None);
            save_error.set(String::new());
            is_saving.set(true);
            let save_handler = save_handler.clone();
            save_handler(draft);
        }
    }

    // Handle the form result
    match form_outcome.get() {
        FormOutcome::Saved => {
            form_outcome.set(FormOutcome::Editing);

            let id = saved_id.to_string();
            saved_id.set(String::new());

            let mut next = state.read().clone();
            next.modal = None;
            next.toast = Some(Toast::success("Movie saved"));
            if !id.is_empty() {
                next.location = next.location.to_detail(id.clone());
                next.detail = None;
                next.detail_phase = FetchPhase::Loading;
            }
            let filters = next.location.filters.clone();
            state.set(next);

            if !id.is_empty() {
                let token = issue_token(&mut detail_tracker);
                let detail_fetch = detail_fetch.clone();
                detail_fetch((token, id));
            }
            // The catalog may have changed underneath the grid
            start_catalog_fetch(
                &mut state,
                &mut catalog_tracker,
                &mut debounce_gate,
                &catalog_fetch,
                filters,
            );
        }
        FormOutcome::Cancelled => {
            form_outcome.set(FormOutcome::Editing);
            save_error.set(String::new());
            is_saving.set(false);
            let next = reduce_browse_state(
                state.read().clone(),
                BrowseAction::CloseModal,
                columns,
                visible_rows,
            );
            state.set(next);
        }
        FormOutcome::Editing => {}
    }

    // Keyboard event handling
    hooks.use_terminal_events({
        let catalog_fetch = catalog_fetch.clone();
        let detail_fetch = detail_fetch.clone();
        let delete_handler = delete_handler.clone();

        move |event| {
            let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            let current = state.read().clone();

            // The confirm dialog is presentational; its keys land here
            if let Some(Modal::ConfirmDelete { movie_id, title }) = &current.modal {
                match code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        let delete_handler = delete_handler.clone();
                        delete_handler((movie_id.clone(), title.clone()));
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        state.set(reduce_browse_state(
                            current,
                            BrowseAction::CloseModal,
                            columns,
                            visible_rows,
                        ));
                    }
                    _ => {}
                }
                return;
            }

            let modal_open = current.modal.is_some();
            let Some(action) = key_to_action(
                code,
                modifiers,
                current.active_pane,
                &current.location.route,
                modal_open,
            ) else {
                return;
            };

            match action {
                BrowseAction::Quit => {
                    should_exit.set(true);
                    return;
                }
                BrowseAction::Refresh => {
                    if let Route::Detail(id) = &current.location.route {
                        start_detail_fetch(
                            &mut state,
                            &mut detail_tracker,
                            &detail_fetch,
                            id.clone(),
                        );
                    } else {
                        let filters = current.location.filters.clone();
                        start_catalog_fetch(
                            &mut state,
                            &mut catalog_tracker,
                            &mut debounce_gate,
                            &catalog_fetch,
                            filters,
                        );
                    }
                    return;
                }
                _ => {}
            }

            let before = current.location.clone();
            let next = reduce_browse_state(current, action, columns, visible_rows);
            let after = next.location.clone();
            let detail_missing = next.detail.is_none();
            state.set(next);

            // Genre, sort, and cleared-search changes refetch immediately;
            // typed queries go through the debounced path instead
            if after.filters != before.filters {
                start_catalog_fetch(
                    &mut state,
                    &mut catalog_tracker,
                    &mut debounce_gate,
                    &catalog_fetch,
                    after.filters.clone(),
                );
            }

            // Entering a detail route starts its fetch; an edit reached
            // from the grid needs the record loaded before the form opens
            if after.route != before.route {
                let target = match &after.route {
                    Route::Detail(id) => Some(id.clone()),
                    Route::Edit(id) if detail_missing => Some(id.clone()),
                    _ => None,
                };
                if let Some(id) = target {
                    let token = issue_token(&mut detail_tracker);
                    let detail_fetch = detail_fetch.clone();
                    detail_fetch((token, id));
                }
            }
        }
    });

    // Exit if requested
    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let snapshot = state.read().clone();
    let vm = compute_view_model(&snapshot, columns, visible_rows);

    // Keep the caller's resume slot current with the displayed location
    if let Some(slot) = &props.exit_location
        && let Ok(mut location) = slot.lock()
    {
        *location = vm.location_display.clone();
    }

    let sort_key_options = options_for::<SortKey>();
    let sort_order_options = options_for::<SortOrder>();
    let detail_movie = snapshot.detail.clone();
    let detail_phase = snapshot.detail_phase.clone();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                location: Some(vm.location_display.clone()),
                movie_count: Some(vm.movie_count),
            )

            #(if vm.showing_detail {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct, padding: 1) {
                        MovieDetailPanel(
                            movie: detail_movie.clone(),
                            phase: detail_phase.clone(),
                        )
                    }
                }.into_any())
            } else {
                let grid = vm.grid.clone();
                let genres = vm.genres.clone();
                let empty_state = vm.empty_state;
                let query = vm.search.query.clone();
                let search_focused = vm.search.is_focused;
                let sort_key_options = sort_key_options.clone();
                let sort_order_options = sort_order_options.clone();
                let sort_key_index = vm.sort_key_index;
                let sort_order_index = vm.sort_order_index;
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                    ) {
                        // Search box
                        View(width: 100pct, padding_left: 1, padding_right: 1) {
                            SearchBox(
                                value: Some(search_input),
                                has_focus: search_focused,
                            )
                        }

                        // Genre tabs and sort controls
                        View(
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            View(flex_grow: 1.0) {
                                GenreTabs(
                                    labels: genres.labels.clone(),
                                    selected_index: genres.selected_index,
                                    has_focus: genres.is_focused,
                                )
                            }
                            View(
                                flex_direction: FlexDirection::Column,
                                border_style: BorderStyle::Round,
                                border_color: theme.border,
                                padding_left: 1,
                                padding_right: 1,
                                margin_left: 1,
                            ) {
                                Select(
                                    label: Some("Sort"),
                                    options: sort_key_options,
                                    selected_index: sort_key_index,
                                )
                                Select(
                                    label: Some("Order"),
                                    options: sort_order_options,
                                    selected_index: sort_order_index,
                                )
                            }
                        }

                        // Grid or empty state
                        View(
                            flex_grow: 1.0,
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            #(if let Some(kind) = empty_state {
                                Some(element! {
                                    EmptyState(
                                        kind: kind,
                                        search_query: if query.is_empty() {
                                            None
                                        } else {
                                            Some(query.clone())
                                        },
                                    )
                                }.into_any())
                            } else {
                                Some(element! {
                                    MovieGrid(
                                        movies: grid.movies.clone(),
                                        selected_index: grid.selected_index,
                                        scroll_offset: grid.scroll_offset,
                                        columns: grid.columns,
                                        visible_rows: grid.visible_rows,
                                        has_focus: grid.is_focused,
                                    )
                                }.into_any())
                            })
                        }
                    }
                }.into_any())
            })

            // Toast notification
            #(render_toast(&vm.toast))

            // Footer
            Footer(shortcuts: vm.shortcuts.clone())

            // Modal overlays
            #(match vm.modal.clone() {
                Some(Modal::Form { movie_id }) => {
                    let movie = if movie_id.is_some() {
                        snapshot.detail.clone()
                    } else {
                        None
                    };
                    Some(element! {
                        MovieForm(
                            movie: movie,
                            on_close: Some(form_outcome),
                            submitted: Some(submitted_draft),
                            save_error: Some(save_error),
                            is_saving: Some(is_saving),
                        )
                    }.into_any())
                }
                Some(Modal::ConfirmDelete { title, .. }) => Some(element! {
                    DeleteConfirmModal(title: title)
                }.into_any()),
                None => None,
            })
        }
    }
}

/// Mint a token from the tracker state, superseding any in-flight request
fn issue_token(tracker: &mut State<RequestTracker>) -> RequestToken {
    let mut t = *tracker.read();
    let token = t.issue();
    tracker.set(t);
    token
}

/// Flip the catalog to Loading and start a tracked fetch.
/// Cancels the debounce gate so a pending typed-query fetch can never
/// fire afterwards with filters older than the ones sent here.
fn start_catalog_fetch(
    state: &mut State<BrowseState>,
    tracker: &mut State<RequestTracker>,
    gate: &mut State<DebounceGate>,
    fetch: &Handler<(RequestToken, FilterState)>,
    filters: FilterState,
) {
    let token = issue_token(tracker);

    let mut g = *gate.read();
    g.cancel();
    gate.set(g);

    let mut next = state.read().clone();
    next.catalog_phase = FetchPhase::Loading;
    state.set(next);

    let fetch = fetch.clone();
    fetch((token, filters));
}

/// Flip the detail pane to Loading and start a tracked fetch
fn start_detail_fetch(
    state: &mut State<BrowseState>,
    tracker: &mut State<RequestTracker>,
    fetch: &Handler<(RequestToken, String)>,
    movie_id: String,
) {
    let token = issue_token(tracker);

    let mut next = state.read().clone();
    next.detail = None;
    next.detail_phase = FetchPhase::Loading;
    state.set(next);

    let fetch = fetch.clone();
    fetch((token, movie_id));
}
