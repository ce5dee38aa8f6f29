use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use crate::api::{ApiClient, ApiError, Auth, Endpoint};
use crate::models::{Credentials, Registration};
use crate::session::{Session, SessionToken};

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    #[serde(default)]
    message: Option<String>,
}

/// Login, registration and logout.
///
/// A successful login or registration persists the returned token in the
/// shared [`Session`]; logout clears it.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn session(&self) -> &Arc<Session> {
        self.client.session()
    }

    /// `POST /auth/login`. Returns the server's message, if any.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<String>, ApiError> {
        require_filled(&[email, password])?;

        let request = self
            .client
            .request(Method::POST, Endpoint::Login, Auth::Anonymous)?
            .json(&Credentials { email, password });
        let response: AuthResponse = self.client.send(request).await?;
        self.store(response)
    }

    /// `POST /auth/register`. The new account is signed in immediately.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        require_filled(&[name, email, password])?;

        let request = self
            .client
            .request(Method::POST, Endpoint::Register, Auth::Anonymous)?
            .json(&Registration {
                name,
                email,
                password,
            });
        let response: AuthResponse = self.client.send(request).await?;
        self.store(response)
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.client.session().clear_token()?;
        info!("logged out");
        Ok(())
    }

    fn store(&self, response: AuthResponse) -> Result<Option<String>, ApiError> {
        let token = SessionToken::new(response.token);
        if token.is_empty() {
            return Err(ApiError::Api {
                status: 200,
                messages: vec!["Server returned an empty token".to_string()],
            });
        }
        self.client.session().set_token(token)?;
        info!("logged in");
        Ok(response.message)
    }
}

fn require_filled(fields: &[&str]) -> Result<(), ApiError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ApiError::validation("Please fill in all fields"));
    }
    Ok(())
}
