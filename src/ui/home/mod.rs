//! Home feed screen.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use screen::HomeScreen;
pub use state::HomeState;
