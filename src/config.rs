//! Top-level application configuration.
//!
//! Configuration is stored in the platform config directory (for example
//! `~/.config/marquee/config.yaml`) and covers:
//! - Movie service base URL
//! - Request timeout and search debounce tuning

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};

/// Default movie service endpoint
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the movie service
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Quiet window before a filter change is sent, in milliseconds (default: 300)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout: default_request_timeout(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = env::var("MARQUEE_CONFIG_DIR")
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir).join("config.yaml"));
        }

        let proj_dirs = directories::ProjectDirs::from("com", "marquee-tui", "marquee")
            .ok_or_else(|| MarqueeError::Config("cannot determine config directory".into()))?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            MarqueeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MarqueeError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            MarqueeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Restrictive permissions on Unix (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions).map_err(|e| {
                MarqueeError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Get the movie service base URL, with environment variable override
    pub fn server_url(&self) -> String {
        if let Ok(url) = env::var("MARQUEE_SERVER_URL")
            && !url.is_empty()
        {
            return url;
        }
        self.server_url.clone()
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "server_url" => Ok(self.server_url.clone()),
            "request_timeout" => Ok(self.request_timeout.to_string()),
            "debounce_ms" => Ok(self.debounce_ms.to_string()),
            _ => Err(MarqueeError::Config(format!("unknown key '{}'", key))),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server_url" => {
                url::Url::parse(value).map_err(|e| {
                    MarqueeError::Config(format!("invalid server_url '{}': {}", value, e))
                })?;
                self.server_url = value.to_string();
            }
            "request_timeout" => {
                self.request_timeout = value.parse().map_err(|_| {
                    MarqueeError::Config(format!("request_timeout must be a number, got '{}'", value))
                })?;
            }
            "debounce_ms" => {
                self.debounce_ms = value.parse().map_err(|_| {
                    MarqueeError::Config(format!("debounce_ms must be a number, got '{}'", value))
                })?;
            }
            _ => return Err(MarqueeError::Config(format!("unknown key '{}'", key))),
        }
        Ok(())
    }
}
