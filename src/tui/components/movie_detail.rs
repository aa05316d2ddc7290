//! Movie detail panel
//!
//! Full-pane view of a single movie, shown when the location points at
//! `/{movieId}`. While the fetch is in flight a loading note is shown;
//! a failed fetch shows the detail error copy instead of the record.

use iocraft::prelude::*;

use crate::api::MovieDetail;
use crate::tui::components::empty_state::DETAIL_ERROR_MESSAGE;
use crate::tui::fetch::FetchPhase;
use crate::tui::theme::theme;

/// Props for the MovieDetailPanel component
#[derive(Default, Props)]
pub struct MovieDetailPanelProps {
    /// The movie to display, once loaded
    pub movie: Option<MovieDetail>,
    /// Lifecycle of the detail fetch
    pub phase: FetchPhase,
}

/// Full-pane movie detail view
#[component]
pub fn MovieDetailPanel(props: &MovieDetailPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.phase.is_loading() || props.phase == FetchPhase::Idle {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
            ) {
                Text(content: "Loading movie...", color: theme.text_dimmed)
            }
        };
    }

    if let Some(error) = props.phase.error() {
        let message = if error.is_not_found() {
            "Movie not found".to_string()
        } else {
            DETAIL_ERROR_MESSAGE.to_string()
        };
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.error,
            ) {
                Text(content: message, color: theme.error)
                View(margin_top: 1) {
                    Text(content: "Press Esc to go back.", color: theme.text_dimmed)
                }
            }
        };
    }

    let Some(movie) = props.movie.clone() else {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
            ) {
                Text(content: "No movie selected", color: theme.text_dimmed)
            }
        };
    };

    let year = if movie.release_year > 0 {
        movie.release_year.to_string()
    } else {
        "unknown".to_string()
    };
    let rating = movie
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "-".to_string());
    let rating_color = movie
        .rating
        .map(|r| theme.rating_color(r))
        .unwrap_or(theme.text_dimmed);
    let duration = movie.duration.clone().unwrap_or_else(|| "-".to_string());
    let genres = movie.genres.join(", ");
    let description = movie
        .description
        .clone()
        .unwrap_or_else(|| "No overview available.".to_string());

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding: 1,
        ) {
            // Title row: title, year badge
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: movie.title.clone(),
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(content: year, color: theme.year)
            }

            // Rating and duration row
            View(flex_direction: FlexDirection::Row, gap: 2, margin_top: 1) {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: "Rating: ", color: theme.text_dimmed)
                    Text(content: rating, color: rating_color, weight: Weight::Bold)
                }
                View(flex_direction: FlexDirection::Row) {
                    Text(content: "Duration: ", color: theme.text_dimmed)
                    Text(content: duration, color: theme.text)
                }
            }

            // Genres
            View(flex_direction: FlexDirection::Row, margin_top: 1) {
                Text(content: "Genres: ", color: theme.text_dimmed)
                Text(content: genres, color: theme.genre_tag)
            }

            // Poster reference
            View(flex_direction: FlexDirection::Row, margin_top: 1) {
                Text(content: "Poster: ", color: theme.text_dimmed)
                Text(content: movie.poster_url.clone(), color: theme.text_dimmed)
            }

            // Overview
            View(
                flex_direction: FlexDirection::Column,
                margin_top: 1,
                flex_grow: 1.0,
                overflow: Overflow::Hidden,
            ) {
                Text(content: "Overview", color: theme.accent, weight: Weight::Bold)
                View(margin_top: 1) {
                    Text(content: description, color: theme.text, wrap: TextWrap::Wrap)
                }
            }
        }
    }
}
