//! Persistent key-value storage for the session token.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use super::token::SessionToken;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "userToken";

/// Errors raised by a token store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Storage backend for the single session slot.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    fn get(&self) -> Result<Option<SessionToken>, SessionError>;

    /// Persist `token`, replacing any previous one.
    fn set(&self, token: &SessionToken) -> Result<(), SessionError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Token store backed by a small TOML file of string keys.
///
/// Other keys in the file are preserved across writes.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, SessionError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string(entries)?;

        // Write-then-rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(|source| SessionError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<SessionToken>, SessionError> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(TOKEN_KEY)
            .filter(|value| !value.is_empty())
            .map(SessionToken::new))
    }

    fn set(&self, token: &SessionToken) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), token.expose().to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

/// In-process token store, used by tests and the `--ephemeral` CLI mode.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SessionToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<SessionToken>, SessionError> {
        Ok(self.token.lock().clone())
    }

    fn set(&self, token: &SessionToken) -> Result<(), SessionError> {
        *self.token.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.token.lock() = None;
        Ok(())
    }
}
