use crate::ui::mvi::UiState;

/// Authentication lifecycle as seen by the screens.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Showing the login form, optionally with the last failure.
    LoggedOut { error: Option<String> },
    /// Credentials submitted, waiting for the server.
    Authenticating,
    LoggedIn,
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::LoggedOut { error: None }
    }
}

impl UiState for AuthState {}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::LoggedIn)
    }

    /// Whether the login form's submit button should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, AuthState::Authenticating)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::LoggedOut { error } => error.as_deref(),
            _ => None,
        }
    }
}
