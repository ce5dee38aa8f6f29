//! Model-View-Intent primitives for the screen layer.
//!
//! ```text
//! accessor result ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                      │
//!        └──────────── controller ◄─────────────┘
//! ```
//!
//! Screens never mutate their state directly: a controller performs the
//! accessor calls and turns every outcome into an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
