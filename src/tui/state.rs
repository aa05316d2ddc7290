//! Shared state types for TUI views

/// Active pane in the movie browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Search,
    Genres,
    #[default]
    Grid,
}

impl Pane {
    /// Cycle to the next pane (Search -> Genres -> Grid -> Search)
    pub fn next(self) -> Self {
        match self {
            Pane::Search => Pane::Genres,
            Pane::Genres => Pane::Grid,
            Pane::Grid => Pane::Search,
        }
    }

    /// Cycle to the previous pane
    pub fn prev(self) -> Self {
        match self {
            Pane::Search => Pane::Grid,
            Pane::Genres => Pane::Search,
            Pane::Grid => Pane::Genres,
        }
    }
}
