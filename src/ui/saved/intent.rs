use crate::models::SavedDestination;
use crate::services::ToggleOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SavedIntent {
    Load { generation: u64 },
    Refresh { generation: u64 },
    Loaded {
        generation: u64,
        items: Vec<SavedDestination>,
    },
    LoadFailed { generation: u64, message: String },

    RemoveStarted { destination_id: String },
    Removed {
        destination_id: String,
        outcome: ToggleOutcome,
    },
    RemoveFailed {
        destination_id: String,
        message: String,
    },

    DismissAlert,
}

impl Intent for SavedIntent {}
