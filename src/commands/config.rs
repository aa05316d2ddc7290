//! Configuration commands for managing marquee settings.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Get a single value
//! - `config path`: Print the config file path

use owo_colors::OwoColorize;
use serde_json::json;

use crate::commands::print_json;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    if json {
        return print_json(&json!({
            "server_url": config.server_url,
            "request_timeout": config.request_timeout,
            "debounce_ms": config.debounce_ms,
            "config_file": path.to_string_lossy(),
        }));
    }

    println!("{}", "Configuration:".cyan().bold());
    println!();
    println!("  {}: {}", "server_url".cyan(), config.server_url);
    println!("  {}: {}", "request_timeout".cyan(), config.request_timeout);
    println!("  {}: {}", "debounce_ms".cyan(), config.debounce_ms);
    println!();
    println!("{}", format!("Config file: {}", path.display()).dimmed());

    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    if json {
        return print_json(&json!({
            "action": "config_set",
            "key": key,
            "value": value,
            "success": true,
        }));
    }

    println!("Set {} to {}", key.cyan(), value);
    Ok(())
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    if json {
        return print_json(&json!({
            "key": key,
            "value": value,
        }));
    }

    println!("{value}");
    Ok(())
}

/// Print the path to the config file
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
