//! Shared TUI components
//!
//! Reusable UI pieces for the movie browser: chrome (header, footer,
//! toasts), inputs (search box, selects, genre tabs), the movie grid and
//! detail panel, and the modal building blocks.

pub mod empty_state;
pub mod footer;
pub mod genre_tabs;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod movie_detail;
pub mod movie_grid;
pub mod search_box;
pub mod select;
pub mod shortcuts;
pub mod toast;

pub use empty_state::{
    CATALOG_ERROR_MESSAGE, DETAIL_ERROR_MESSAGE, EmptyState, EmptyStateKind, EmptyStateProps,
    compute_empty_state,
};
pub use footer::{
    Footer, FooterProps, Shortcut, confirm_shortcuts, detail_shortcuts, empty_shortcuts,
    form_shortcuts, genre_shortcuts, grid_shortcuts, search_shortcuts,
};
pub use genre_tabs::{GenreTabs, GenreTabsProps, genre_tab_labels};
pub use header::{Header, HeaderProps};
pub use modal_container::{
    ModalBorderColor, ModalContainer, ModalContainerProps, ModalHeight, ModalWidth,
};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use movie_detail::{MovieDetailPanel, MovieDetailPanelProps};
pub use movie_grid::{
    CARD_HEIGHT, CARD_WIDTH, MovieCard, MovieCardProps, MovieGrid, MovieGridProps, grid_columns,
    grid_rows,
};
pub use search_box::{SEARCH_PLACEHOLDER, SearchBox, SearchBoxProps};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use shortcuts::ShortcutsBuilder;
pub use toast::{Toast, ToastLevel, render_toast};
