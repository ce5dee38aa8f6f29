mod common;

use common::{anonymous, catalogue, logged_in, MockBackend, MockResponse};
use motour::api::{ApiClient, ApiError};
use motour::services::Services;
use motour::session::{FileTokenStore, Session, SessionState, TokenStore};
use motour::ui::auth::{AuthScreen, AuthState, SESSION_EXPIRED_MESSAGE};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn file_backed(backend: &MockBackend, dir: &TempDir) -> Services {
    let store = FileTokenStore::new(dir.path().join("session.toml"));
    let session = Arc::new(Session::open(store).unwrap());
    let client = ApiClient::new(&common::api_config(&backend.base_url()), session).unwrap();
    Services::from_client(client)
}

#[tokio::test]
async fn test_login_persists_token_and_following_calls_carry_it() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::success(
            json!({ "token": "jwt-123", "message": "Login successful" }),
        ))
        .await;
    backend.enqueue_response(MockResponse::data(catalogue())).await;

    let dir = TempDir::new().unwrap();
    let services = file_backed(&backend, &dir);
    let message = services
        .auth
        .login("ana@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(message.as_deref(), Some("Login successful"));
    assert_eq!(services.session().state(), SessionState::LoggedIn);

    let persisted = FileTokenStore::new(dir.path().join("session.toml"))
        .get()
        .unwrap()
        .unwrap();
    assert_eq!(persisted.expose(), "jwt-123");

    services.destinations.list_all().await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/auth/login");
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(
        requests[0].json(),
        json!({ "email": "ana@example.com", "password": "secret" })
    );
    assert_eq!(requests[1].header("authorization"), Some("Bearer jwt-123"));
}

#[tokio::test]
async fn test_empty_fields_rejected_locally() {
    let backend = MockBackend::start().await;
    let services = anonymous(&backend);

    let err = services.auth.login("", "secret").await.unwrap_err();
    assert_eq!(err.display_message(), "Please fill in all fields");
    let err = services
        .auth
        .register("Ana", "ana@example.com", "")
        .await
        .unwrap_err();
    assert_eq!(err.display_message(), "Please fill in all fields");

    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn test_bad_credentials_do_not_expire_session() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(401, "Invalid credentials"))
        .await;

    let services = anonymous(&backend);
    let mut rx = services.session().subscribe();
    let mut screen = AuthScreen::new(services.auth.clone());
    let state = screen.login("ana@example.com", "wrong").await;

    assert_eq!(
        state,
        &AuthState::LoggedOut {
            error: Some("Invalid credentials".to_string())
        }
    );
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn test_register_signs_in() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::success(json!({ "token": "new-jwt" })).with_status(201))
        .await;

    let services = anonymous(&backend);
    let mut screen = AuthScreen::new(services.auth.clone());
    assert!(screen
        .register("Ana", "ana@example.com", "secret")
        .await
        .is_logged_in());

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/auth/register");
    assert_eq!(
        requests[0].json(),
        json!({ "name": "Ana", "email": "ana@example.com", "password": "secret" })
    );
    assert_eq!(services.session().token().unwrap().expose(), "new-jwt");
}

#[tokio::test]
async fn test_401_clears_token_and_returns_screen_to_login() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(401, "Invalid token"))
        .await;

    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.toml"));
    store
        .set(&motour::session::SessionToken::new("stale"))
        .unwrap();
    let services = file_backed(&backend, &dir);

    let mut screen = AuthScreen::new(services.auth.clone());
    assert!(screen.state().is_logged_in());
    assert!(!screen.poll_session());

    let err = services.saved.list_saved().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert!(err.is_auth_failure());

    assert!(services.session().token().is_none());
    assert!(store.get().unwrap().is_none());

    assert!(screen.poll_session());
    assert_eq!(screen.state().error(), Some(SESSION_EXPIRED_MESSAGE));
    assert!(!screen.poll_session());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let backend = MockBackend::start().await;
    let services = logged_in(&backend);

    let mut screen = AuthScreen::new(services.auth.clone());
    assert!(screen.state().is_logged_in());
    screen.logout().unwrap();

    assert_eq!(screen.state(), &AuthState::default());
    assert_eq!(services.session().state(), SessionState::LoggedOut);
    assert!(!screen.poll_session());
}

#[tokio::test]
async fn test_health() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::default()).await;

    anonymous(&backend).client.health().await.unwrap();
    assert_eq!(backend.captured_requests().await[0].path, "/api/health");
}
