//! Profile screen.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use screen::ProfileScreen;
pub use state::{EditField, ProfileState, ProfileView};
