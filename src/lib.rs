//! Client-side data access for the Motour travel service: destinations,
//! ratings, saved destinations, the user session, and the screen
//! controllers built on top of them.

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod ui;
