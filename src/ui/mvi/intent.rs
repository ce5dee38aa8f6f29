/// Marker trait for screen intents: user actions and accessor outcomes.
pub trait Intent: Send + 'static {}
