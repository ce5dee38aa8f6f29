//! Error types for remote API calls.
//!
//! Provides structured error classification and the `BestEffort` marker
//! for calls whose failures are absorbed into a safe default.

use thiserror::Error;
use tracing::warn;

use crate::session::SessionError;

/// Errors that can occur when calling the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: the request never reached or returned from the server.
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The server responded but signalled failure.
    #[error("API error ({status}): {}", join_or(.messages, "request failed"))]
    Api { status: u16, messages: Vec<String> },

    /// Input rejected, either before dispatch or by the server.
    #[error("Validation failed: {}", join_or(.messages, "invalid input"))]
    Validation { messages: Vec<String> },

    /// HTTP 401. The session has already been invalidated.
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("session expired"))]
    Unauthorized { message: Option<String> },

    /// A call that needs a token was attempted without one.
    #[error("Not logged in")]
    NotAuthenticated,

    /// The response body did not have the expected shape.
    #[error("Unexpected response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot carry endpoint paths.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Token storage failed.
    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    /// The HTTP client or a request part could not be built.
    #[error("HTTP client error: {0}")]
    Client(reqwest::Error),
}

fn join_or(messages: &[String], fallback: &str) -> String {
    if messages.is_empty() {
        fallback.to_string()
    } else {
        messages.join(", ")
    }
}

impl ApiError {
    /// Client-side validation failure with a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            messages: vec![message.into()],
        }
    }

    /// Text suitable for a user-facing alert.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "Network error. Please try again.".to_string(),
            ApiError::Api { messages, .. } => join_or(messages, "Request failed"),
            ApiError::Validation { messages } => join_or(messages, "Invalid input"),
            ApiError::Unauthorized { .. } | ApiError::NotAuthenticated => {
                "Your session has expired. Please log in again.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether this error ended the session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::NotAuthenticated)
    }

    /// Stable error kind string for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Api { .. } => "api_error",
            ApiError::Validation { .. } => "validation_error",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::NotAuthenticated => "not_authenticated",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Session(_) => "session_error",
            ApiError::Client(_) => "client_error",
        }
    }
}

/// Result of a best-effort call.
///
/// Authoritative accessors return `Result<T, ApiError>`; best-effort ones
/// return this instead and never fail. A `Fallback` carries the safe
/// default together with the error that was absorbed, so callers can tell
/// a real answer from a guess.
#[derive(Debug)]
pub enum BestEffort<T> {
    Authoritative(T),
    Fallback { value: T, reason: ApiError },
}

impl<T> BestEffort<T> {
    /// Absorb `result` into `fallback` on error, logging the reason.
    pub(crate) fn from_result(result: Result<T, ApiError>, fallback: T, call: &str) -> Self {
        match result {
            Ok(value) => BestEffort::Authoritative(value),
            Err(reason) => {
                warn!(call, kind = reason.kind(), error = %reason, "best-effort call fell back to default");
                BestEffort::Fallback {
                    value: fallback,
                    reason,
                }
            }
        }
    }

    pub fn value(&self) -> &T {
        match self {
            BestEffort::Authoritative(value) => value,
            BestEffort::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            BestEffort::Authoritative(value) => value,
            BestEffort::Fallback { value, .. } => value,
        }
    }

    pub fn is_authoritative(&self) -> bool {
        matches!(self, BestEffort::Authoritative(_))
    }

    /// The absorbed error, if this is a fallback.
    pub fn reason(&self) -> Option<&ApiError> {
        match self {
            BestEffort::Authoritative(_) => None,
            BestEffort::Fallback { reason, .. } => Some(reason),
        }
    }
}
