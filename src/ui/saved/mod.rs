//! Saved destinations screen.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::SavedIntent;
pub use reducer::SavedReducer;
pub use screen::SavedScreen;
pub use state::SavedState;
