//! Terminal user interface for browsing the movie catalog
//!
//! Built as a component tree: `view::MovieBrowser` is the root, the
//! shared pieces live in `components`, and the pure state logic sits in
//! `view::model` where it can be tested without a terminal.

pub mod components;
pub mod confirm;
pub mod edit;
pub mod fetch;
pub mod handlers;
pub mod services;
pub mod state;
pub mod theme;
pub mod view;

pub use view::MovieBrowser;
