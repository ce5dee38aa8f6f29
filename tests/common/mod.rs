//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use motour::api::ApiClient;
use motour::config::{ApiConfig, Config};
use motour::services::Services;
use motour::session::{MemoryTokenStore, Session, SessionToken};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

pub const TOKEN: &str = "test-token";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}/api", free_port())
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: Some(base_url.to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

/// Services over an in-memory session, optionally holding `token`.
pub fn services(base_url: &str, token: Option<&str>) -> Services {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(SessionToken::new(token)),
        None => MemoryTokenStore::new(),
    };
    let session = Arc::new(Session::open(store).expect("memory store never fails"));
    let client = ApiClient::new(&api_config(base_url), session).expect("valid base url");
    Services::from_client(client)
}

pub fn logged_in(backend: &MockBackend) -> Services {
    services(&backend.base_url(), Some(TOKEN))
}

pub fn anonymous(backend: &MockBackend) -> Services {
    services(&backend.base_url(), None)
}

// -- Fixtures -----------------------------------------------------------------

pub fn destination(id: &str, name: &str, rating: f64, created_at: &str, category: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "photos": { "main": format!("https://img.example/{id}.jpg"), "others": [] },
        "geo": { "lat": 10.3, "lng": 123.9 },
        "category": category,
        "averageRating": rating,
        "description": format!("About {name}"),
        "address": "Cebu, Philippines",
        "tags": [],
        "createdAt": created_at,
        "updatedAt": created_at,
    })
}

pub fn rating(id: &str, destination_id: &str, stars: u8, comment: &str) -> Value {
    json!({
        "_id": id,
        "destinationId": destination_id,
        "userId": { "_id": "u1", "email": "ana@example.com", "name": "Ana" },
        "rating": stars,
        "comment": comment,
        "createdAt": "2024-05-01T10:00:00.000Z",
    })
}

/// Five destinations with distinct ratings and creation times.
pub fn catalogue() -> Value {
    json!([
        destination("d1", "Kawasan Falls", 4.8, "2024-01-10T00:00:00.000Z", "Falls"),
        destination("d2", "Osmeña Peak", 4.5, "2024-03-01T00:00:00.000Z", "Mountain"),
        destination("d3", "Moalboal", 3.9, "2024-05-20T00:00:00.000Z", "Beach"),
        destination("d4", "Bantayan", 4.2, "2023-12-01T00:00:00.000Z", "beach"),
        destination("d5", "Temple of Leah", 3.1, "2024-04-15T00:00:00.000Z", "Landmark"),
    ])
}
