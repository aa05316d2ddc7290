//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-s", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Save", "Next field")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the movie grid pane
pub fn grid_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_search()
        .with_sorting()
        .add("Enter", "Open")
        .add("n", "Add Movie")
        .add("e", "Edit")
        .add("d", "Delete")
        .add("Tab", "Switch Pane")
        .with_quit()
        .build()
}

/// Shortcuts for the genre tabs pane
pub fn genre_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("h/l", "Genre")
        .with_search()
        .with_sorting()
        .add("Tab", "Switch Pane")
        .with_quit()
        .build()
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Apply Search")
        .add("Tab", "Exit Search")
        .add("Esc", "Clear & Exit")
        .add("C-q", "Quit")
        .build()
}

/// Shortcuts for the movie detail screen
pub fn detail_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Esc", "Back to Search")
        .add("e", "Edit")
        .add("d", "Delete")
        .with_quit()
        .build()
}

/// Shortcuts for the movie form
pub fn form_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Next Field")
        .add("S-Tab", "Prev Field")
        .add("C-s", "Save")
        .add("C-r", "Reset")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for the delete confirmation dialog
pub fn confirm_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("y", "Delete")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts shown when an empty or error state fills the screen
pub fn empty_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_search()
        .add("n", "Add Movie")
        .add("r", "Retry")
        .with_quit()
        .build()
}
