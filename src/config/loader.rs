use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{ApiConfig, Config};

/// Environment variable that overrides the resolved API base URL.
pub const API_URL_ENV: &str = "MOTOUR_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/motour/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("motour").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The resolved base URL is http(s)
    /// - Timeouts and feed limits are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.resolved_base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Base URL '{}' must start with http:// or https://", base_url),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "timeout_seconds must be at least 1".to_string(),
            });
        }

        if self.feed.popular_limit == 0 || self.feed.new_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "Feed limits must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Path of the session file, falling back to the platform data directory.
    pub fn session_path(&self) -> PathBuf {
        self.session.path.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("motour").join("session.toml")
        })
    }
}

impl ApiConfig {
    /// Base URL from explicit override or the environment's default.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended as-is.
    pub fn resolved_base_url(&self) -> String {
        let url = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.default_base_url());
        url.trim_end_matches('/').to_string()
    }

    /// Applies the `MOTOUR_API_URL` override if set and non-empty.
    pub fn apply_env_override(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = Some(url.trim().to_string());
            }
        }
    }
}
