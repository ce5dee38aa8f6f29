//! The `{ success, ... }` response envelope every endpoint returns.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// `{ success, count?, data: [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// `{ success, data: {...} }`
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Validate the envelope of a decoded (or undecodable) response body.
///
/// Returns the body when the status is 2xx and `success` is `true`.
/// A missing or false `success` flag is an application-level failure;
/// 400 and 422 are reported as validation failures.
pub(crate) fn check(status: StatusCode, body: Option<Value>) -> Result<Value, ApiError> {
    let success = body
        .as_ref()
        .and_then(|v| v.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if success && status.is_success() {
        return Ok(body.unwrap_or(Value::Null));
    }

    let mut messages = body.as_ref().map(collect_messages).unwrap_or_default();
    if messages.is_empty() && !status.is_success() {
        if let Some(reason) = status.canonical_reason() {
            messages.push(reason.to_string());
        }
    }

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            Err(ApiError::Validation { messages })
        }
        _ => Err(ApiError::Api {
            status: status.as_u16(),
            messages,
        }),
    }
}

/// Gather human-readable messages from `message` and `error` fields.
///
/// Each field may be a string or a list of strings.
pub(crate) fn collect_messages(body: &Value) -> Vec<String> {
    let mut messages = Vec::new();
    for key in ["error", "message"] {
        match body.get(key) {
            Some(Value::String(s)) if !s.is_empty() => messages.push(s.clone()),
            Some(Value::Array(items)) => messages.extend(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            ),
            _ => {}
        }
    }
    messages
}

/// First message in `body`, if any.
pub(crate) fn first_message(body: &Value) -> Option<String> {
    collect_messages(body).into_iter().next()
}
