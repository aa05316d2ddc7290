//! App header bar component
//!
//! Displays the application logo, the current location, and the result count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Current in-app location (e.g. "/?genre=COMEDY")
    pub location: Option<String>,

    /// Number of movies in the current result set
    pub movie_count: Option<usize>,
}

/// App header bar showing logo, location, and movie count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.accent,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: "MARQUEE",
                    color: Color::White,
                    weight: Weight::Bold,
                )
                #(props.location.clone().map(|loc| element! {
                    Text(
                        content: loc,
                        color: Color::White,
                    )
                }))
            }
            #(props.movie_count.map(|count| element! {
                Text(
                    content: format!("{} movies", count),
                    color: Color::White,
                )
            }))
        }
    }
}
