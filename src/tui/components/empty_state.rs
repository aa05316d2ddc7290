//! Empty state component
//!
//! Displays a full-pane message while the catalog loads, when it comes
//! back empty, or when the movie service is unreachable.

use iocraft::prelude::*;

use crate::tui::fetch::FetchPhase;
use crate::tui::theme::theme;

/// User-facing message when the catalog cannot be fetched
pub const CATALOG_ERROR_MESSAGE: &str =
    "Unable to connect to the movie service. Please try again later.";

/// User-facing message when a movie detail cannot be fetched
pub const DETAIL_ERROR_MESSAGE: &str =
    "Sorry, we could not load the movie details. Please try again later.";

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The catalog fetch is in flight
    Loading,
    /// The catalog is genuinely empty
    #[default]
    NoMovies,
    /// No movies match the active search or genre filter
    NoSearchResults,
    /// The movie service could not be reached
    ConnectionError,
}

/// Decide which empty state, if any, fills the grid pane
pub fn compute_empty_state(
    phase: &FetchPhase,
    result_count: usize,
    has_filters: bool,
) -> Option<EmptyStateKind> {
    match phase {
        FetchPhase::Idle | FetchPhase::Loading => Some(EmptyStateKind::Loading),
        FetchPhase::Failed(_) => Some(EmptyStateKind::ConnectionError),
        FetchPhase::Loaded => {
            if result_count > 0 {
                None
            } else if has_filters {
                Some(EmptyStateKind::NoSearchResults)
            } else {
                Some(EmptyStateKind::NoMovies)
            }
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Optional search query (for NoSearchResults)
    pub search_query: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching movies...", ""),
        EmptyStateKind::NoMovies => (
            "i",
            "No Movies",
            "The catalog is empty.",
            "Press 'n' to add your first movie.",
        ),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No Results",
            "No movies match your search.",
            "Try a different title or genre, or press Esc to clear.",
        ),
        EmptyStateKind::ConnectionError => (
            "!",
            "Connection Error",
            CATALOG_ERROR_MESSAGE,
            "Press 'r' to retry.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            // Icon in a box
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if props.kind == EmptyStateKind::ConnectionError {
                    theme.error
                } else {
                    theme.border
                },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if props.kind == EmptyStateKind::ConnectionError {
                        theme.error
                    } else {
                        theme.text_dimmed
                    },
                    weight: Weight::Bold,
                )
            }

            // Title
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            // Message
            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            // Search query (if applicable)
            #(if props.kind == EmptyStateKind::NoSearchResults && props.search_query.is_some() {
                let query = props.search_query.clone().unwrap_or_default();
                Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: format!("Search: \"{}\"", query),
                            color: theme.accent,
                        )
                    }
                })
            } else {
                None
            })

            // Hint
            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
