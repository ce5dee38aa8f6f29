use crate::models::Destination;
use crate::ui::alert::Alert;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub loading: bool,
    pub popular: Vec<Destination>,
    pub newest: Vec<Destination>,
    pub error: Option<String>,
    pub alert: Option<Alert>,
    /// Selected category chip and its destinations.
    pub category: Option<String>,
    pub category_results: Vec<Destination>,
    /// Generation of the most recently requested load.
    /// Results tagged with an older generation are discarded.
    pub generation: u64,
}

impl UiState for HomeState {}
