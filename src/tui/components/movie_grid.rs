//! Scrollable movie grid component
//!
//! Lays the catalog out as rows of tiles with selection highlighting and
//! scroll indicators. Rows scroll as a unit; the parent tracks the scroll
//! offset in rows.

use iocraft::prelude::*;

use crate::api::MovieSummary;
use crate::tui::theme::theme;

/// Terminal rows one tile occupies, border included
pub const CARD_HEIGHT: usize = 5;

/// Minimum terminal columns per tile
pub const CARD_WIDTH: usize = 28;

/// How many tiles fit side by side at the given terminal width
pub fn grid_columns(terminal_width: u16) -> usize {
    ((terminal_width as usize) / CARD_WIDTH).max(1)
}

/// How many tile rows fit in the given pane height
pub fn grid_rows(pane_height: usize) -> usize {
    (pane_height / CARD_HEIGHT).max(1)
}

/// Props for the MovieGrid component
#[derive(Default, Props)]
pub struct MovieGridProps {
    /// Movies to display
    pub movies: Vec<MovieSummary>,
    /// Index of the currently selected movie
    pub selected_index: usize,
    /// First visible row of tiles
    pub scroll_offset: usize,
    /// Tiles per row
    pub columns: usize,
    /// Visible tile rows
    pub visible_rows: usize,
    /// Whether the grid has focus
    pub has_focus: bool,
}

/// Scrollable movie tile grid with selection
#[component]
pub fn MovieGrid(props: &MovieGridProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let columns = props.columns.max(1);
    let total = props.movies.len();
    let total_rows = total.div_ceil(columns);

    let first_row = props.scroll_offset.min(total_rows.saturating_sub(1));
    let has_more_above = first_row > 0;

    let tile_rows = props.visible_rows.max(1);
    let last_row = (first_row + tile_rows).min(total_rows);
    let has_more_below = last_row < total_rows;

    let hidden_above = first_row * columns;
    let hidden_below = total.saturating_sub(last_row * columns);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            // "More above" indicator
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more above", hidden_above),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            // Tile rows
            #((first_row..last_row).map(|row| {
                let start = row * columns;
                let end = (start + columns).min(total);
                let row_movies: Vec<(usize, MovieSummary)> = (start..end)
                    .map(|i| (i, props.movies[i].clone()))
                    .collect();
                let selected_index = props.selected_index;
                let has_focus = props.has_focus;
                element! {
                    View(
                        width: 100pct,
                        height: CARD_HEIGHT as u32,
                        flex_direction: FlexDirection::Row,
                    ) {
                        #(row_movies.into_iter().map(move |(index, movie)| {
                            element! {
                                MovieCard(
                                    movie: movie,
                                    is_selected: index == selected_index,
                                    has_focus: has_focus && index == selected_index,
                                )
                            }
                        }))
                    }
                }
            }))

            // "More below" indicator
            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more below", hidden_below),
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

/// Props for a single movie tile
#[derive(Default, Props)]
pub struct MovieCardProps {
    /// The movie to display
    pub movie: MovieSummary,
    /// Whether this tile is selected
    pub is_selected: bool,
    /// Whether this tile has focus
    pub has_focus: bool,
}

/// Single movie tile in the grid
#[component]
pub fn MovieCard(props: &MovieCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let movie = &props.movie;

    let border_color = if props.has_focus {
        theme.border_focused
    } else if props.is_selected {
        theme.highlight
    } else {
        theme.border
    };

    let year = if movie.release_year > 0 {
        movie.release_year.to_string()
    } else {
        "----".to_string()
    };

    let genres = movie.genres.join(", ");

    element! {
        View(
            width: CARD_WIDTH as u32,
            height: CARD_HEIGHT as u32,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            Text(
                content: movie.title.clone(),
                color: if props.is_selected { theme.highlight } else { theme.text },
                weight: Weight::Bold,
                wrap: TextWrap::NoWrap,
            )
            Text(content: year, color: theme.year)
            Text(
                content: genres,
                color: theme.genre_tag,
                wrap: TextWrap::NoWrap,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_from_width() {
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(120), 4);
        // Never zero, even on a tiny terminal
        assert_eq!(grid_columns(10), 1);
    }

    #[test]
    fn test_grid_rows_from_height() {
        assert_eq!(grid_rows(20), 4);
        assert_eq!(grid_rows(3), 1);
    }

    // Props derive Default, so the movie type must too
    #[test]
    fn test_card_props_default() {
        let props = MovieCardProps::default();
        assert!(props.movie.id.is_empty());
        assert!(props.movie.genres.is_empty());
        assert!(!props.is_selected);
    }
}
