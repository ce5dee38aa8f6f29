use crate::models::SavedDestination;
use crate::ui::alert::Alert;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedState {
    /// First load with nothing to show yet.
    pub loading: bool,
    /// Pull-to-refresh over an existing list.
    pub refreshing: bool,
    pub items: Vec<SavedDestination>,
    /// Destination whose removal is in flight.
    pub removing: Option<String>,
    pub alert: Option<Alert>,
    pub generation: u64,
}

impl UiState for SavedState {}

impl SavedState {
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}
