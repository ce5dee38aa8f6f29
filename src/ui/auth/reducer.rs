use crate::ui::auth::intent::AuthIntent;
use crate::ui::auth::state::AuthState;
use crate::ui::mvi::Reducer;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Restored => match state {
                AuthState::LoggedOut { .. } => AuthState::LoggedIn,
                other => other,
            },
            AuthIntent::Submit => match state {
                AuthState::LoggedOut { .. } => AuthState::Authenticating,
                other => other,
            },
            AuthIntent::Succeeded => match state {
                AuthState::Authenticating => AuthState::LoggedIn,
                other => other,
            },
            AuthIntent::Failed { message } => match state {
                AuthState::Authenticating => AuthState::LoggedOut {
                    error: Some(message),
                },
                other => other,
            },
            AuthIntent::Logout => AuthState::LoggedOut { error: None },
            AuthIntent::SessionExpired => AuthState::LoggedOut {
                error: Some(SESSION_EXPIRED_MESSAGE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_success_logs_in() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::Submit);
        assert!(state.is_busy());
        let state = AuthReducer::reduce(state, AuthIntent::Succeeded);
        assert!(state.is_logged_in());
    }

    #[test]
    fn failure_keeps_server_message() {
        let state = AuthReducer::reduce(AuthState::Authenticating, AuthIntent::Failed {
            message: "Invalid credentials".to_string(),
        });
        assert_eq!(state.error(), Some("Invalid credentials"));
    }

    #[test]
    fn double_submit_is_ignored() {
        let state = AuthReducer::reduce(AuthState::Authenticating, AuthIntent::Submit);
        assert_eq!(state, AuthState::Authenticating);
    }

    #[test]
    fn stray_success_does_not_log_in() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::Succeeded);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn expiry_from_any_state_logs_out() {
        for state in [AuthState::LoggedIn, AuthState::Authenticating] {
            let next = AuthReducer::reduce(state, AuthIntent::SessionExpired);
            assert_eq!(next.error(), Some(SESSION_EXPIRED_MESSAGE));
        }
    }
}
