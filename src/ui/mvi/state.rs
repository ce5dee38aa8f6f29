/// Marker trait for a screen's view state.
///
/// Holds everything needed to render the screen; compared with `PartialEq`
/// to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
