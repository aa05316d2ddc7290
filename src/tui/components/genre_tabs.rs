//! Genre filter tabs
//!
//! A horizontal row of genre affordances. A deep link can carry a genre
//! outside the affordance list; such a genre is appended as its own tab
//! so the active filter is always visible.

use iocraft::prelude::*;

use crate::filters::{GENRE_FILTERS, GenreTag};
use crate::tui::theme::theme;

/// Tab labels plus the index of the active one for the given filter
pub fn genre_tab_labels(genre: &GenreTag) -> (Vec<String>, usize) {
    let mut labels: Vec<String> = GENRE_FILTERS.iter().map(|g| g.to_string()).collect();

    if let Some(pos) = labels.iter().position(|label| genre.matches(label)) {
        return (labels, pos);
    }

    // Unknown genre from a deep link: shown verbatim at the end
    labels.push(genre.to_string());
    let last = labels.len() - 1;
    (labels, last)
}

/// Props for the GenreTabs component
#[derive(Default, Props)]
pub struct GenreTabsProps {
    /// Tab labels to display
    pub labels: Vec<String>,
    /// Index of the active tab
    pub selected_index: usize,
    /// Whether the tabs pane has focus
    pub has_focus: bool,
}

/// Horizontal genre tab bar
#[component]
pub fn GenreTabs(props: &GenreTabsProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            height: 3,
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            column_gap: 2,
        ) {
            #(props.labels.iter().enumerate().map(|(i, label)| {
                let is_active = i == props.selected_index;
                let label = label.clone();
                element! {
                    View(
                        padding_left: 1,
                        padding_right: 1,
                        background_color: if is_active { Some(theme.accent) } else { None },
                    ) {
                        Text(
                            content: label,
                            color: if is_active { Color::White } else { theme.text_dimmed },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selected_by_default() {
        let (labels, selected) = genre_tab_labels(&GenreTag::All);
        assert_eq!(labels.len(), GENRE_FILTERS.len());
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_known_genre_selected() {
        let (labels, selected) = genre_tab_labels(&GenreTag::Named("COMEDY".to_string()));
        assert_eq!(labels[selected], "COMEDY");
        assert_eq!(labels.len(), GENRE_FILTERS.len());
    }

    #[test]
    fn test_known_genre_case_insensitive() {
        let (labels, selected) = genre_tab_labels(&GenreTag::Named("horror".to_string()));
        assert_eq!(labels[selected], "HORROR");
    }

    #[test]
    fn test_unknown_genre_appended_verbatim() {
        let (labels, selected) = genre_tab_labels(&GenreTag::Named("WESTERN".to_string()));
        assert_eq!(labels.len(), GENRE_FILTERS.len() + 1);
        assert_eq!(labels[selected], "WESTERN");
        assert_eq!(selected, labels.len() - 1);
    }
}
