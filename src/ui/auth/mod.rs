//! Authentication flow: `LoggedOut → Authenticating → LoggedIn`, and back
//! to `LoggedOut` on logout or when any accessor receives a 401.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::AuthIntent;
pub use reducer::{AuthReducer, SESSION_EXPIRED_MESSAGE};
pub use screen::AuthScreen;
pub use state::AuthState;
