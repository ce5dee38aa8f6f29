//! HTTP client wrapper for the Motour REST API.
//!
//! Every request is JSON with an optional bearer token, and every response
//! carries a `success` envelope. Transport failures, application failures,
//! validation failures and 401s are classified into [`ApiError`].

mod client;
mod endpoints;
pub(crate) mod envelope;
mod error;

pub use client::ApiClient;
pub(crate) use client::Auth;
pub use endpoints::Endpoint;
pub use error::{ApiError, BestEffort};
