//! Session context: the client-held bearer token and its lifecycle.
//!
//! A single `Session` is shared (behind an `Arc`) by every accessor instead
//! of a process-wide global. It caches the token read from its
//! [`TokenStore`] and publishes [`SessionState`] changes on a watch channel
//! so screens can react when the server invalidates the token.

mod store;
mod token;

pub use store::{FileTokenStore, MemoryTokenStore, SessionError, TokenStore, TOKEN_KEY};
pub use token::SessionToken;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{info, warn};

/// Observable lifecycle of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A token is held.
    LoggedIn,
    /// No token; the user never logged in or logged out explicitly.
    LoggedOut,
    /// The server answered 401 and the token was discarded.
    Expired,
}

/// Shared session context passed to every accessor.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: RwLock<Option<SessionToken>>,
    state: watch::Sender<SessionState>,
}

impl Session {
    /// Open a session over `store`, loading any persisted token.
    pub fn open(store: impl TokenStore + 'static) -> Result<Self, SessionError> {
        let token = store.get()?;
        let initial = if token.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        };
        let (state, _) = watch::channel(initial);

        Ok(Self {
            store: Box::new(store),
            token: RwLock::new(token),
            state,
        })
    }

    /// Session with no persistence and no token.
    pub fn in_memory() -> Self {
        let (state, _) = watch::channel(SessionState::LoggedOut);
        Self {
            store: Box::new(MemoryTokenStore::new()),
            token: RwLock::new(None),
            state,
        }
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<SessionToken> {
        self.token.read().clone()
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Subscribe to session state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Persist a freshly issued token and mark the session logged in.
    pub fn set_token(&self, token: SessionToken) -> Result<(), SessionError> {
        self.store.set(&token)?;
        *self.token.write() = Some(token);
        self.state.send_replace(SessionState::LoggedIn);
        info!("session token stored");
        Ok(())
    }

    /// Explicit logout.
    ///
    /// The in-memory token is dropped even if the store fails to clear.
    pub fn clear_token(&self) -> Result<(), SessionError> {
        self.token.write().take();
        self.state.send_replace(SessionState::LoggedOut);
        info!("session cleared");
        self.store.clear()
    }

    /// Discard the token after the server rejected it. Never fails.
    pub fn invalidate(&self) {
        self.token.write().take();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear persisted token after 401");
        }
        self.state.send_replace(SessionState::Expired);
        info!("session invalidated by server");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .field("token", &self.token())
            .finish()
    }
}
