//! Movie browser command (`marquee browse`)
//!
//! Launches the interactive TUI. The optional location argument deep-links
//! into the grid, a detail screen, or the add/edit form, and the final
//! location is printed on exit so a session can be resumed.

use std::sync::{Arc, Mutex};

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{MarqueeError, Result};
use crate::location::Location;
use crate::tui::MovieBrowser;

/// Launch the movie browser TUI
pub async fn cmd_browse(location: Option<&str>) -> Result<()> {
    let initial = match location {
        Some(raw) => Location::parse(raw)?,
        None => Location::default(),
    };
    let config = Config::load()?;

    let exit_location = Arc::new(Mutex::new(initial.to_string()));

    element! {
        MovieBrowser(
            initial_location: Some(initial),
            debounce_ms: Some(config.debounce_ms),
            exit_location: Some(exit_location.clone()),
        )
    }
    .fullscreen()
    .await
    .map_err(|e| MarqueeError::Other(format!("TUI error: {}", e)))?;

    if let Ok(location) = exit_location.lock() {
        println!("{}", *location);
    }

    Ok(())
}
