//! Destination detail screen.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use screen::DetailScreen;
pub use state::{DetailState, RatingDraft, RatingEntry, RatingStatus};
