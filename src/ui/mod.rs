//! Screen controllers.
//!
//! Each screen is an MVI triple (state, intent, reducer) plus an async
//! controller that calls the services and dispatches the outcomes.

pub mod alert;
pub mod auth;
pub mod detail;
pub mod home;
pub mod mvi;
pub mod profile;
pub mod saved;

pub use alert::Alert;
