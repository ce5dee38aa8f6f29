use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Build environment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Base URL used when no explicit override is configured.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:3000/api",
            Environment::Production => "https://motour_server_101.onrender.com/api",
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Which environment's default base URL to use.
    #[serde(default)]
    pub environment: Environment,
    /// Explicit base URL including the `/api` prefix. Wins over `environment`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where the session token is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file path. Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Home feed sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Number of destinations in the "popular" row (default: 3).
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,
    /// Number of destinations in the "new" row (default: 5).
    #[serde(default = "default_new_limit")]
    pub new_limit: usize,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_popular_limit() -> usize {
    3
}

fn default_new_limit() -> usize {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            popular_limit: default_popular_limit(),
            new_limit: default_new_limit(),
        }
    }
}
