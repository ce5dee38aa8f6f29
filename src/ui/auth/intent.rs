use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// A persisted token was found at startup.
    Restored,
    /// Login or registration form submitted.
    Submit,
    Succeeded,
    Failed { message: String },
    /// User chose to log out.
    Logout,
    /// The server rejected the token (HTTP 401).
    SessionExpired,
}

impl Intent for AuthIntent {}
