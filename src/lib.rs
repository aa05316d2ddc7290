pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod location;
pub mod tui;

pub use config::Config;
pub use error::{MarqueeError, Result};
pub use filters::{FilterState, GenreTag, SortKey, SortOrder};
pub use location::{Location, Route};
