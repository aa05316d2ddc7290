//! MovieBrowser model types for testable state management
//!
//! Separates raw state (BrowseState) from the computed view model so the
//! navigation, filtering, and focus logic can be unit tested without the
//! iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::api::{MovieDetail, MovieSummary};
use crate::filters::GenreTag;
use crate::location::{Location, Route};
use crate::tui::components::select::Selectable;
use crate::tui::components::{
    EmptyStateKind, Shortcut, Toast, compute_empty_state, confirm_shortcuts, detail_shortcuts,
    empty_shortcuts, form_shortcuts, genre_shortcuts, genre_tab_labels, grid_shortcuts,
    search_shortcuts,
};
use crate::tui::fetch::FetchPhase;
use crate::tui::state::Pane;

/// Modal dialog currently covering the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// The movie form. `movie_id` is None when creating.
    Form { movie_id: Option<String> },
    /// Delete confirmation for the movie currently shown
    ConfirmDelete { movie_id: String, title: String },
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    /// Current in-app location; the single source of truth for route and filters
    pub location: Location,
    /// Catalog results for the active filters
    pub movies: Vec<MovieSummary>,
    /// Lifecycle of the catalog fetch
    pub catalog_phase: FetchPhase,
    /// Loaded detail record, when the route points at a movie
    pub detail: Option<MovieDetail>,
    /// Lifecycle of the detail fetch
    pub detail_phase: FetchPhase,
    /// Index of the selected tile in the grid
    pub selected_index: usize,
    /// First visible tile row
    pub scroll_offset: usize,
    /// Currently active pane on the browse screen
    pub active_pane: Pane,
    /// Optional toast notification
    pub toast: Option<Toast>,
    /// Modal dialog, if one is open
    pub modal: Option<Modal>,
}

/// All possible actions on the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    // Grid navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageDown,
    PageUp,

    // Pane cycling
    CyclePaneForward,
    CyclePaneBackward,

    // Search
    FocusSearch,
    UpdateSearch(String),
    ExitSearch,
    ClearSearchAndExit,

    // Filters
    GenreNext,
    GenrePrev,
    CycleSortKey,
    CycleSortOrder,

    // Routing
    OpenSelected,
    Back,

    // Mutations
    CreateNew,
    EditCurrent,
    RequestDeleteCurrent,
    CloseModal,

    // Handled externally (async or system context)
    Refresh,
    Quit,
}

/// Computed view model for rendering the entire browser
#[derive(Debug, Clone)]
pub struct BrowseViewModel {
    pub search: SearchViewModel,
    pub genres: GenreTabsViewModel,
    pub grid: GridViewModel,
    /// Index into the sort-key options
    pub sort_key_index: usize,
    /// Index into the sort-order options
    pub sort_order_index: usize,
    /// Whether the detail screen covers the browse panes
    pub showing_detail: bool,
    /// Empty state filling the grid pane, if any
    pub empty_state: Option<EmptyStateKind>,
    /// Keyboard shortcuts for the footer
    pub shortcuts: Vec<Shortcut>,
    pub toast: Option<Toast>,
    pub modal: Option<Modal>,
    /// The location rendered in the header
    pub location_display: String,
    pub movie_count: usize,
}

/// View model for the search box
#[derive(Debug, Clone)]
pub struct SearchViewModel {
    pub query: String,
    pub is_focused: bool,
}

/// View model for the genre tab bar
#[derive(Debug, Clone)]
pub struct GenreTabsViewModel {
    pub labels: Vec<String>,
    pub selected_index: usize,
    pub is_focused: bool,
}

/// View model for the movie grid
#[derive(Debug, Clone)]
pub struct GridViewModel {
    pub movies: Vec<MovieSummary>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub is_focused: bool,
    pub columns: usize,
    pub visible_rows: usize,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(
    state: &BrowseState,
    columns: usize,
    visible_rows: usize,
) -> BrowseViewModel {
    let filters = &state.location.filters;
    let has_filters = !filters.query.is_empty() || filters.genre != GenreTag::All;
    let showing_detail = matches!(state.location.route, Route::Detail(_) | Route::Edit(_));
    let modal_open = state.modal.is_some();

    let empty_state = if showing_detail {
        None
    } else {
        compute_empty_state(&state.catalog_phase, state.movies.len(), has_filters)
    };

    let show_full_empty_state = matches!(
        empty_state,
        Some(EmptyStateKind::NoMovies) | Some(EmptyStateKind::ConnectionError)
    );

    let shortcuts = match &state.modal {
        Some(Modal::Form { .. }) => form_shortcuts(),
        Some(Modal::ConfirmDelete { .. }) => confirm_shortcuts(),
        None if showing_detail => detail_shortcuts(),
        None if show_full_empty_state => empty_shortcuts(),
        None => match state.active_pane {
            Pane::Search => search_shortcuts(),
            Pane::Genres => genre_shortcuts(),
            Pane::Grid => grid_shortcuts(),
        },
    };

    let (labels, genre_index) = genre_tab_labels(&filters.genre);

    BrowseViewModel {
        search: SearchViewModel {
            query: filters.query.clone(),
            is_focused: state.active_pane == Pane::Search && !modal_open && !showing_detail,
        },
        genres: GenreTabsViewModel {
            labels,
            selected_index: genre_index,
            is_focused: state.active_pane == Pane::Genres && !modal_open && !showing_detail,
        },
        grid: GridViewModel {
            movies: state.movies.clone(),
            selected_index: state.selected_index,
            scroll_offset: state.scroll_offset,
            is_focused: state.active_pane == Pane::Grid && !modal_open && !showing_detail,
            columns,
            visible_rows,
        },
        sort_key_index: filters.sort_by.index(),
        sort_order_index: filters.sort_order.index(),
        showing_detail,
        empty_state,
        shortcuts,
        toast: state.toast.clone(),
        modal: state.modal.clone(),
        location_display: state.location.to_string(),
        movie_count: state.movies.len(),
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only pure state transitions. Actions that require async I/O
/// (Refresh, and the fetches implied by filter changes) are issued by the
/// component after reducing.
pub fn reduce_browse_state(
    mut state: BrowseState,
    action: BrowseAction,
    columns: usize,
    visible_rows: usize,
) -> BrowseState {
    let columns = columns.max(1);
    let count = state.movies.len();

    match action {
        // Grid navigation
        BrowseAction::MoveRight => {
            if count > 0 {
                state.selected_index = (state.selected_index + 1).min(count - 1);
            }
        }
        BrowseAction::MoveLeft => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        BrowseAction::MoveDown => {
            if count > 0 && state.selected_index + columns < count {
                state.selected_index += columns;
            } else if count > 0 && state.selected_index / columns < (count - 1) / columns {
                // Partial last row: land on its final tile
                state.selected_index = count - 1;
            }
        }
        BrowseAction::MoveUp => {
            if state.selected_index >= columns {
                state.selected_index -= columns;
            }
        }
        BrowseAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::GoToBottom => {
            if count > 0 {
                state.selected_index = count - 1;
            }
        }
        BrowseAction::PageDown => {
            if count > 0 {
                let jump = columns * visible_rows.max(1);
                state.selected_index = (state.selected_index + jump).min(count - 1);
            }
        }
        BrowseAction::PageUp => {
            let jump = columns * visible_rows.max(1);
            state.selected_index = state.selected_index.saturating_sub(jump);
        }

        // Pane cycling
        BrowseAction::CyclePaneForward => {
            state.active_pane = state.active_pane.next();
        }
        BrowseAction::CyclePaneBackward => {
            state.active_pane = state.active_pane.prev();
        }

        // Search
        BrowseAction::FocusSearch => {
            state.active_pane = Pane::Search;
        }
        BrowseAction::UpdateSearch(query) => {
            state.location.filters.query = query;
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::ExitSearch => {
            state.active_pane = Pane::Grid;
        }
        BrowseAction::ClearSearchAndExit => {
            state.location.filters.query = String::new();
            state.active_pane = Pane::Grid;
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        // Genre cycling moves through the tab labels, which include a
        // verbatim tab for an unknown deep-linked genre
        BrowseAction::GenreNext => {
            let (labels, index) = genre_tab_labels(&state.location.filters.genre);
            let next = (index + 1) % labels.len();
            state.location.filters.genre = GenreTag::from_param(&labels[next]);
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::GenrePrev => {
            let (labels, index) = genre_tab_labels(&state.location.filters.genre);
            let prev = if index == 0 { labels.len() - 1 } else { index - 1 };
            state.location.filters.genre = GenreTag::from_param(&labels[prev]);
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::CycleSortKey => {
            state.location.filters.sort_by = state.location.filters.sort_by.next();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::CycleSortOrder => {
            state.location.filters.sort_order = state.location.filters.sort_order.next();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        // Routing
        BrowseAction::OpenSelected => {
            if let Some(movie) = state.movies.get(state.selected_index) {
                state.location = state.location.to_detail(movie.id.clone());
                state.detail = None;
                state.detail_phase = FetchPhase::Loading;
            }
        }
        BrowseAction::Back => {
            if state.modal.is_some() {
                state = close_modal(state);
            } else if !matches!(state.location.route, Route::Browse) {
                state.location = state.location.to_browse();
                state.detail = None;
                state.detail_phase = FetchPhase::Idle;
            }
        }

        // Mutations
        BrowseAction::CreateNew => {
            state.location = state.location.to_new();
            state.modal = Some(Modal::Form { movie_id: None });
        }
        // Edit and delete work from the detail screen and from the grid's
        // selected tile alike
        BrowseAction::EditCurrent => {
            if let Some(detail) = &state.detail {
                state.location = state.location.to_edit(detail.id.clone());
                state.modal = Some(Modal::Form {
                    movie_id: Some(detail.id.clone()),
                });
            } else if let Some(movie) = state.movies.get(state.selected_index) {
                // The record is not loaded yet; the form opens once the
                // detail fetch lands
                state.location = state.location.to_edit(movie.id.clone());
                state.detail = None;
                state.detail_phase = FetchPhase::Loading;
            }
        }
        BrowseAction::RequestDeleteCurrent => {
            let target = state
                .detail
                .as_ref()
                .map(|d| (d.id.clone(), d.title.clone()))
                .or_else(|| {
                    state
                        .movies
                        .get(state.selected_index)
                        .map(|m| (m.id.clone(), m.title.clone()))
                });
            if let Some((movie_id, title)) = target {
                state.modal = Some(Modal::ConfirmDelete { movie_id, title });
            }
        }
        BrowseAction::CloseModal => {
            state = close_modal(state);
        }

        // Require async I/O or system context, handled externally
        BrowseAction::Refresh | BrowseAction::Quit => {}
    }

    // Keep the selection visible and in bounds after any transition
    let count = state.movies.len();
    if count > 0 && state.selected_index >= count {
        state.selected_index = count - 1;
    }
    let selected_row = state.selected_index / columns;
    state.scroll_offset = adjust_scroll(state.scroll_offset, selected_row, visible_rows);

    state
}

/// Closing a modal returns to the screen beneath it: cancelling a create
/// goes back to the grid, cancelling an edit back to the detail screen.
fn close_modal(mut state: BrowseState) -> BrowseState {
    state.modal = None;
    match state.location.route.clone() {
        Route::New => {
            state.location = state.location.to_browse();
        }
        Route::Edit(id) => {
            state.location = state.location.to_detail(id);
        }
        _ => {}
    }
    state
}

/// Adjust scroll offset to keep the selected row visible
pub fn adjust_scroll(scroll_offset: usize, selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }

    if selected_row < scroll_offset {
        return selected_row;
    }

    if selected_row >= scroll_offset + visible_rows {
        return selected_row.saturating_sub(visible_rows - 1);
    }

    scroll_offset
}

/// Convert a key event to a BrowseAction (pure function)
///
/// Returns `None` if the key doesn't map to any action. Keys are not
/// mapped while a modal is open; modals handle their own events.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    active_pane: Pane,
    route: &Route,
    modal_open: bool,
) -> Option<BrowseAction> {
    if modal_open {
        return None;
    }

    if matches!(route, Route::Detail(_)) {
        return detail_key_to_action(code);
    }

    match active_pane {
        Pane::Search => search_key_to_action(code, modifiers),
        Pane::Genres => genres_key_to_action(code),
        Pane::Grid => grid_key_to_action(code),
    }
}

fn grid_key_to_action(code: KeyCode) -> Option<BrowseAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(BrowseAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowseAction::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(BrowseAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BrowseAction::MoveRight),
        KeyCode::Char('g') => Some(BrowseAction::GoToTop),
        KeyCode::Char('G') => Some(BrowseAction::GoToBottom),
        KeyCode::PageDown => Some(BrowseAction::PageDown),
        KeyCode::PageUp => Some(BrowseAction::PageUp),

        KeyCode::Tab => Some(BrowseAction::CyclePaneForward),
        KeyCode::BackTab => Some(BrowseAction::CyclePaneBackward),

        KeyCode::Enter => Some(BrowseAction::OpenSelected),
        KeyCode::Char('/') => Some(BrowseAction::FocusSearch),
        KeyCode::Char('n') => Some(BrowseAction::CreateNew),
        KeyCode::Char('e') => Some(BrowseAction::EditCurrent),
        KeyCode::Char('d') => Some(BrowseAction::RequestDeleteCurrent),
        KeyCode::Char('s') => Some(BrowseAction::CycleSortKey),
        KeyCode::Char('o') => Some(BrowseAction::CycleSortOrder),
        KeyCode::Char('r') => Some(BrowseAction::Refresh),

        KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),

        _ => None,
    }
}

fn genres_key_to_action(code: KeyCode) -> Option<BrowseAction> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(BrowseAction::GenrePrev),
        KeyCode::Char('l') | KeyCode::Right => Some(BrowseAction::GenreNext),

        KeyCode::Tab | KeyCode::Enter => Some(BrowseAction::CyclePaneForward),
        KeyCode::BackTab => Some(BrowseAction::CyclePaneBackward),

        KeyCode::Char('/') => Some(BrowseAction::FocusSearch),
        KeyCode::Char('n') => Some(BrowseAction::CreateNew),
        KeyCode::Char('s') => Some(BrowseAction::CycleSortKey),
        KeyCode::Char('o') => Some(BrowseAction::CycleSortOrder),
        KeyCode::Char('r') => Some(BrowseAction::Refresh),

        KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),

        _ => None,
    }
}

fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BrowseAction> {
    match (code, modifiers) {
        // Escape clears and exits
        (KeyCode::Esc, _) => Some(BrowseAction::ClearSearchAndExit),
        // Enter/Tab exits keeping query
        (KeyCode::Enter, _) | (KeyCode::Tab, _) => Some(BrowseAction::ExitSearch),
        // Ctrl+Q quits
        (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => Some(BrowseAction::Quit),
        // Other characters are handled by the search box component
        _ => None,
    }
}

fn detail_key_to_action(code: KeyCode) -> Option<BrowseAction> {
    match code {
        KeyCode::Esc | KeyCode::Backspace => Some(BrowseAction::Back),
        KeyCode::Char('e') => Some(BrowseAction::EditCurrent),
        KeyCode::Char('d') => Some(BrowseAction::RequestDeleteCurrent),
        KeyCode::Char('r') => Some(BrowseAction::Refresh),
        KeyCode::Char('q') => Some(BrowseAction::Quit),
        _ => None,
    }
}

/// Get the currently selected movie
pub fn get_selected_movie(state: &BrowseState) -> Option<&MovieSummary> {
    state.movies.get(state.selected_index)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{SortKey, SortOrder};
    use crate::tui::fetch::FetchError;

    fn make_movie(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            poster_url: "https://img.example.com/p.jpg".to_string(),
            title: title.to_string(),
            release_year: 2003,
            genres: vec!["COMEDY".to_string()],
        }
    }

    fn make_detail(id: &str, title: &str) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            poster_url: "https://img.example.com/p.jpg".to_string(),
            title: title.to_string(),
            release_year: 2003,
            release_date: "2003-05-30".to_string(),
            genres: vec!["COMEDY".to_string()],
            rating: Some(7.5),
            duration: Some("103 min".to_string()),
            description: Some("A movie.".to_string()),
        }
    }

    fn state_with_movies(count: usize) -> BrowseState {
        BrowseState {
            movies: (0..count)
                .map(|i| make_movie(&i.to_string(), &format!("Movie {i}")))
                .collect(),
            catalog_phase: FetchPhase::Loaded,
            ..Default::default()
        }
    }

    // ========================================================================
    // Reducer Tests - Navigation
    // ========================================================================

    #[test]
    fn test_reduce_move_right() {
        let state = state_with_movies(6);
        let state = reduce_browse_state(state, BrowseAction::MoveRight, 3, 4);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_reduce_move_right_clamps_at_end() {
        let mut state = state_with_movies(6);
        state.selected_index = 5;
        let state = reduce_browse_state(state, BrowseAction::MoveRight, 3, 4);
        assert_eq!(state.selected_index, 5);
    }

    #[test]
    fn test_reduce_move_left_clamps_at_start() {
        let state = state_with_movies(6);
        let state = reduce_browse_state(state, BrowseAction::MoveLeft, 3, 4);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_reduce_move_down_jumps_one_row() {
        let state = state_with_movies(9);
        let state = reduce_browse_state(state, BrowseAction::MoveDown, 3, 4);
        assert_eq!(state.selected_index, 3);
    }

    #[test]
    fn test_reduce_move_down_partial_last_row() {
        // 7 movies, 3 columns: moving down from index 5 lands on the last tile
        let mut state = state_with_movies(7);
        state.selected_index = 5;
        let state = reduce_browse_state(state, BrowseAction::MoveDown, 3, 4);
        assert_eq!(state.selected_index, 6);
    }

    #[test]
    fn test_reduce_move_up_stays_on_top_row() {
        let mut state = state_with_movies(9);
        state.selected_index = 1;
        let state = reduce_browse_state(state, BrowseAction::MoveUp, 3, 4);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_reduce_go_to_top_and_bottom() {
        let mut state = state_with_movies(20);
        state.selected_index = 10;
        let state = reduce_browse_state(state, BrowseAction::GoToBottom, 3, 2);
        assert_eq!(state.selected_index, 19);
        // Bottom row must be scrolled into view
        assert!(state.scroll_offset >= 5);

        let state = reduce_browse_state(state, BrowseAction::GoToTop, 3, 2);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_reduce_page_down_moves_a_screenful() {
        let state = state_with_movies(30);
        let state = reduce_browse_state(state, BrowseAction::PageDown, 3, 2);
        assert_eq!(state.selected_index, 6);
    }

    #[test]
    fn test_reduce_scroll_follows_selection() {
        let mut state = state_with_movies(30);
        state.selected_index = 0;
        // Move down 4 rows with 2 visible: scroll must follow
        for _ in 0..4 {
            state = reduce_browse_state(state, BrowseAction::MoveDown, 3, 2);
        }
        assert_eq!(state.selected_index, 12);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_reduce_selection_clamped_when_results_shrink() {
        let mut state = state_with_movies(3);
        state.selected_index = 10;
        let state = reduce_browse_state(state, BrowseAction::MoveRight, 3, 4);
        assert!(state.selected_index < 3);
    }

    // ========================================================================
    // Reducer Tests - Panes and Search
    // ========================================================================

    #[test]
    fn test_reduce_cycle_panes() {
        let state = BrowseState::default();
        assert_eq!(state.active_pane, Pane::Grid);
        let state = reduce_browse_state(state, BrowseAction::CyclePaneForward, 3, 4);
        assert_eq!(state.active_pane, Pane::Search);
        let state = reduce_browse_state(state, BrowseAction::CyclePaneForward, 3, 4);
        assert_eq!(state.active_pane, Pane::Genres);
        let state = reduce_browse_state(state, BrowseAction::CyclePaneBackward, 3, 4);
        assert_eq!(state.active_pane, Pane::Search);
    }

    #[test]
    fn test_reduce_update_search_resets_selection() {
        let mut state = state_with_movies(9);
        state.selected_index = 5;
        state.scroll_offset = 1;
        let state =
            reduce_browse_state(state, BrowseAction::UpdateSearch("queen".to_string()), 3, 4);
        assert_eq!(state.location.filters.query, "queen");
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_reduce_clear_search_and_exit() {
        let mut state = state_with_movies(3);
        state.active_pane = Pane::Search;
        state.location.filters.query = "queen".to_string();
        let state = reduce_browse_state(state, BrowseAction::ClearSearchAndExit, 3, 4);
        assert_eq!(state.location.filters.query, "");
        assert_eq!(state.active_pane, Pane::Grid);
    }

    #[test]
    fn test_reduce_exit_search_keeps_query() {
        let mut state = state_with_movies(3);
        state.active_pane = Pane::Search;
        state.location.filters.query = "queen".to_string();
        let state = reduce_browse_state(state, BrowseAction::ExitSearch, 3, 4);
        assert_eq!(state.location.filters.query, "queen");
        assert_eq!(state.active_pane, Pane::Grid);
    }

    // ========================================================================
    // Reducer Tests - Filters
    // ========================================================================

    #[test]
    fn test_reduce_genre_next_from_all() {
        let state = state_with_movies(3);
        let state = reduce_browse_state(state, BrowseAction::GenreNext, 3, 4);
        assert_eq!(
            state.location.filters.genre,
            GenreTag::Named("DOCUMENTARY".to_string())
        );
    }

    #[test]
    fn test_reduce_genre_prev_wraps_to_last() {
        let state = state_with_movies(3);
        let state = reduce_browse_state(state, BrowseAction::GenrePrev, 3, 4);
        assert_eq!(
            state.location.filters.genre,
            GenreTag::Named("CRIME".to_string())
        );
    }

    #[test]
    fn test_reduce_genre_cycle_escapes_unknown_genre() {
        let mut state = state_with_movies(3);
        state.location.filters.genre = GenreTag::Named("WESTERN".to_string());
        let state = reduce_browse_state(state, BrowseAction::GenreNext, 3, 4);
        // The verbatim tab sits at the end; next wraps to ALL
        assert_eq!(state.location.filters.genre, GenreTag::All);
    }

    #[test]
    fn test_reduce_cycle_sort() {
        let state = state_with_movies(3);
        assert_eq!(state.location.filters.sort_by, SortKey::ReleaseDate);
        let state = reduce_browse_state(state, BrowseAction::CycleSortKey, 3, 4);
        assert_eq!(state.location.filters.sort_by, SortKey::Title);

        assert_eq!(state.location.filters.sort_order, SortOrder::Desc);
        let state = reduce_browse_state(state, BrowseAction::CycleSortOrder, 3, 4);
        assert_eq!(state.location.filters.sort_order, SortOrder::Asc);
    }

    // ========================================================================
    // Reducer Tests - Routing
    // ========================================================================

    #[test]
    fn test_reduce_open_selected_preserves_filters() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/?query=queen&genre=COMEDY").unwrap();
        state.selected_index = 2;
        let state = reduce_browse_state(state, BrowseAction::OpenSelected, 3, 4);
        assert_eq!(state.location.route, Route::Detail("2".to_string()));
        assert_eq!(state.location.to_string(), "/2?query=queen&genre=COMEDY");
        assert_eq!(state.detail_phase, FetchPhase::Loading);
    }

    #[test]
    fn test_reduce_open_selected_on_empty_grid_is_noop() {
        let state = state_with_movies(0);
        let state = reduce_browse_state(state, BrowseAction::OpenSelected, 3, 4);
        assert_eq!(state.location.route, Route::Browse);
    }

    #[test]
    fn test_reduce_back_from_detail_restores_filters() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/2?query=queen").unwrap();
        state.detail = Some(make_detail("2", "Movie 2"));
        state.detail_phase = FetchPhase::Loaded;
        let state = reduce_browse_state(state, BrowseAction::Back, 3, 4);
        assert_eq!(state.location.to_string(), "/?query=queen");
        assert!(state.detail.is_none());
        assert_eq!(state.detail_phase, FetchPhase::Idle);
    }

    #[test]
    fn test_reduce_back_on_browse_is_noop() {
        let state = state_with_movies(5);
        let state = reduce_browse_state(state, BrowseAction::Back, 3, 4);
        assert_eq!(state.location.route, Route::Browse);
    }

    // ========================================================================
    // Reducer Tests - Modals
    // ========================================================================

    #[test]
    fn test_reduce_create_new_opens_form_at_new_route() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/?genre=COMEDY").unwrap();
        let state = reduce_browse_state(state, BrowseAction::CreateNew, 3, 4);
        assert_eq!(state.location.route, Route::New);
        assert_eq!(state.modal, Some(Modal::Form { movie_id: None }));
        // Filters survive the route change
        assert_eq!(state.location.to_string(), "/new?genre=COMEDY");
    }

    #[test]
    fn test_reduce_edit_current_requires_loaded_detail() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/2").unwrap();
        let state = reduce_browse_state(state, BrowseAction::EditCurrent, 3, 4);
        assert!(state.modal.is_none());

        let mut state = state_with_movies(5);
        state.location = Location::parse("/2").unwrap();
        state.detail = Some(make_detail("2", "Movie 2"));
        let state = reduce_browse_state(state, BrowseAction::EditCurrent, 3, 4);
        assert_eq!(state.location.route, Route::Edit("2".to_string()));
        assert_eq!(
            state.modal,
            Some(Modal::Form {
                movie_id: Some("2".to_string())
            })
        );
    }

    #[test]
    fn test_reduce_cancel_create_returns_to_browse() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/new?query=queen").unwrap();
        state.modal = Some(Modal::Form { movie_id: None });
        let state = reduce_browse_state(state, BrowseAction::CloseModal, 3, 4);
        assert!(state.modal.is_none());
        assert_eq!(state.location.to_string(), "/?query=queen");
    }

    #[test]
    fn test_reduce_cancel_edit_returns_to_detail() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/2/edit").unwrap();
        state.detail = Some(make_detail("2", "Movie 2"));
        state.modal = Some(Modal::Form {
            movie_id: Some("2".to_string()),
        });
        let state = reduce_browse_state(state, BrowseAction::CloseModal, 3, 4);
        assert!(state.modal.is_none());
        assert_eq!(state.location.route, Route::Detail("2".to_string()));
    }

    #[test]
    fn test_reduce_edit_from_grid_loads_record_first() {
        // Pressing edit on a grid tile navigates to its edit route; the
        // form waits for the detail fetch instead of opening empty
        let mut state = state_with_movies(5);
        state.selected_index = 2;
        let state = reduce_browse_state(state, BrowseAction::EditCurrent, 3, 4);
        assert_eq!(state.location.route, Route::Edit("2".to_string()));
        assert!(state.modal.is_none());
        assert_eq!(state.detail_phase, FetchPhase::Loading);
    }

    #[test]
    fn test_reduce_delete_from_grid_targets_selected_tile() {
        let mut state = state_with_movies(5);
        state.selected_index = 3;
        let state = reduce_browse_state(state, BrowseAction::RequestDeleteCurrent, 3, 4);
        assert_eq!(
            state.modal,
            Some(Modal::ConfirmDelete {
                movie_id: "3".to_string(),
                title: "Movie 3".to_string()
            })
        );
    }

    #[test]
    fn test_reduce_delete_confirmation_flow() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/2").unwrap();
        state.detail = Some(make_detail("2", "Movie 2"));
        let state = reduce_browse_state(state, BrowseAction::RequestDeleteCurrent, 3, 4);
        assert_eq!(
            state.modal,
            Some(Modal::ConfirmDelete {
                movie_id: "2".to_string(),
                title: "Movie 2".to_string()
            })
        );

        // Back dismisses the confirmation without leaving the detail screen
        let state = reduce_browse_state(state, BrowseAction::Back, 3, 4);
        assert!(state.modal.is_none());
        assert_eq!(state.location.route, Route::Detail("2".to_string()));
    }

    // ========================================================================
    // Key Mapping Tests
    // ========================================================================

    #[test]
    fn test_key_to_action_grid_navigation() {
        let route = Route::Browse;
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Left, KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('G'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::GoToBottom)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::OpenSelected)
        );
    }

    #[test]
    fn test_key_to_action_grid_commands() {
        let route = Route::Browse;
        assert_eq!(
            key_to_action(KeyCode::Char('/'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::FocusSearch)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('n'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::CreateNew)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('e'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::EditCurrent)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::RequestDeleteCurrent)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::CycleSortKey)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('o'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::CycleSortOrder)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::Quit)
        );
    }

    #[test]
    fn test_key_to_action_genre_pane() {
        let route = Route::Browse;
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE, Pane::Genres, &route, false),
            Some(BrowseAction::GenrePrev)
        );
        assert_eq!(
            key_to_action(KeyCode::Right, KeyModifiers::NONE, Pane::Genres, &route, false),
            Some(BrowseAction::GenreNext)
        );
    }

    #[test]
    fn test_key_to_action_search_mode() {
        let route = Route::Browse;
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Pane::Search, &route, false),
            Some(BrowseAction::ClearSearchAndExit)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, Pane::Search, &route, false),
            Some(BrowseAction::ExitSearch)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, Pane::Search, &route, false),
            Some(BrowseAction::Quit)
        );
        // Regular characters are handled by the search box component
        assert_eq!(
            key_to_action(KeyCode::Char('a'), KeyModifiers::NONE, Pane::Search, &route, false),
            None
        );
    }

    #[test]
    fn test_key_to_action_detail_route() {
        let route = Route::Detail("2".to_string());
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::Back)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('e'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::EditCurrent)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::NONE, Pane::Grid, &route, false),
            Some(BrowseAction::RequestDeleteCurrent)
        );
    }

    #[test]
    fn test_key_to_action_modal_swallow() {
        let route = Route::New;
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Pane::Grid, &route, true),
            None
        );
    }

    // ========================================================================
    // View Model Tests
    // ========================================================================

    #[test]
    fn test_compute_view_model_loading() {
        let state = BrowseState::default();
        let vm = compute_view_model(&state, 3, 4);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::Loading));
        assert!(!vm.showing_detail);
    }

    #[test]
    fn test_compute_view_model_with_movies() {
        let state = state_with_movies(5);
        let vm = compute_view_model(&state, 3, 4);
        assert_eq!(vm.movie_count, 5);
        assert!(vm.empty_state.is_none());
        assert!(vm.grid.is_focused);
    }

    #[test]
    fn test_compute_view_model_error_state() {
        let mut state = state_with_movies(0);
        state.catalog_phase =
            FetchPhase::Failed(FetchError::Unavailable("connect error".to_string()));
        let vm = compute_view_model(&state, 3, 4);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::ConnectionError));
    }

    #[test]
    fn test_compute_view_model_no_results_with_query() {
        let mut state = state_with_movies(0);
        state.catalog_phase = FetchPhase::Loaded;
        state.location.filters.query = "zzz".to_string();
        let vm = compute_view_model(&state, 3, 4);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::NoSearchResults));
    }

    #[test]
    fn test_compute_view_model_detail_route() {
        let mut state = state_with_movies(5);
        state.location = Location::parse("/2").unwrap();
        state.detail = Some(make_detail("2", "Movie 2"));
        state.detail_phase = FetchPhase::Loaded;
        let vm = compute_view_model(&state, 3, 4);
        assert!(vm.showing_detail);
        assert!(!vm.grid.is_focused);
        assert!(vm.empty_state.is_none());
        assert!(vm.shortcuts.iter().any(|s| s.action == "Edit"));
    }

    #[test]
    fn test_compute_view_model_modal_removes_focus() {
        let mut state = state_with_movies(5);
        state.modal = Some(Modal::Form { movie_id: None });
        let vm = compute_view_model(&state, 3, 4);
        assert!(!vm.grid.is_focused);
        assert!(!vm.search.is_focused);
        assert!(vm.shortcuts.iter().any(|s| s.action == "Save"));
    }

    #[test]
    fn test_compute_view_model_pane_focus() {
        let mut state = state_with_movies(5);
        state.active_pane = Pane::Search;
        let vm = compute_view_model(&state, 3, 4);
        assert!(vm.search.is_focused);
        assert!(!vm.genres.is_focused);

        state.active_pane = Pane::Genres;
        let vm = compute_view_model(&state, 3, 4);
        assert!(vm.genres.is_focused);
    }

    #[test]
    fn test_compute_view_model_location_display() {
        let mut state = state_with_movies(1);
        state.location = Location::parse("/?query=queen&genre=HORROR").unwrap();
        let vm = compute_view_model(&state, 3, 4);
        assert_eq!(vm.location_display, "/?query=queen&genre=HORROR");
        assert_eq!(vm.genres.labels[vm.genres.selected_index], "HORROR");
    }

    // ========================================================================
    // Helper Function Tests
    // ========================================================================

    #[test]
    fn test_adjust_scroll_within_bounds() {
        assert_eq!(adjust_scroll(0, 2, 4), 0);
        assert_eq!(adjust_scroll(3, 5, 4), 3);
    }

    #[test]
    fn test_adjust_scroll_below_visible() {
        assert_eq!(adjust_scroll(0, 6, 4), 3);
    }

    #[test]
    fn test_adjust_scroll_above_visible() {
        assert_eq!(adjust_scroll(5, 2, 4), 2);
    }

    #[test]
    fn test_adjust_scroll_zero_height() {
        assert_eq!(adjust_scroll(5, 10, 0), 0);
    }

    #[test]
    fn test_get_selected_movie() {
        let mut state = state_with_movies(5);
        state.selected_index = 3;
        assert_eq!(get_selected_movie(&state).unwrap().id, "3");

        state.movies.clear();
        assert!(get_selected_movie(&state).is_none());
    }
}
