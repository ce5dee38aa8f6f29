use tokio::sync::watch;
use tracing::info;

use crate::api::ApiError;
use crate::services::AuthService;
use crate::session::SessionState;
use crate::ui::auth::intent::AuthIntent;
use crate::ui::auth::reducer::AuthReducer;
use crate::ui::auth::state::AuthState;
use crate::ui::mvi::Reducer;

/// Login/registration controller and session watcher.
pub struct AuthScreen {
    auth: AuthService,
    session_state: watch::Receiver<SessionState>,
    state: AuthState,
}

impl AuthScreen {
    pub fn new(auth: AuthService) -> Self {
        let mut session_state = auth.session().subscribe();
        let restored = *session_state.borrow_and_update() == SessionState::LoggedIn;

        let mut screen = Self {
            auth,
            session_state,
            state: AuthState::default(),
        };
        if restored {
            screen.dispatch(AuthIntent::Restored);
        }
        screen
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: AuthIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = AuthReducer::reduce(state, intent);
    }

    pub async fn login(&mut self, email: &str, password: &str) -> &AuthState {
        self.dispatch(AuthIntent::Submit);
        let result = self.auth.login(email, password).await;
        self.finish(result)
    }

    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> &AuthState {
        self.dispatch(AuthIntent::Submit);
        let result = self.auth.register(name, email, password).await;
        self.finish(result)
    }

    pub fn logout(&mut self) -> Result<(), ApiError> {
        let result = self.auth.logout();
        // The local token is gone even if the store failed.
        self.dispatch(AuthIntent::Logout);
        self.session_state.mark_unchanged();
        result
    }

    /// Apply a pending server-side invalidation, if one happened.
    ///
    /// Returns `true` when the screen transitioned to logged out.
    pub fn poll_session(&mut self) -> bool {
        let expired = self.session_state.has_changed().unwrap_or(false)
            && *self.session_state.borrow_and_update() == SessionState::Expired;
        if expired && !matches!(self.state, AuthState::LoggedOut { .. }) {
            info!("session expired; returning to login");
            self.dispatch(AuthIntent::SessionExpired);
            return true;
        }
        false
    }

    /// Wait until the server invalidates the session, then log out.
    pub async fn expired(&mut self) {
        if self
            .session_state
            .wait_for(|state| *state == SessionState::Expired)
            .await
            .is_ok()
        {
            self.dispatch(AuthIntent::SessionExpired);
        }
    }

    fn finish(&mut self, result: Result<Option<String>, ApiError>) -> &AuthState {
        match result {
            Ok(_) => {
                self.session_state.mark_unchanged();
                self.dispatch(AuthIntent::Succeeded);
            }
            Err(e) => self.dispatch(AuthIntent::Failed {
                message: e.display_message(),
            }),
        }
        &self.state
    }
}
