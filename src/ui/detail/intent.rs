use crate::models::{DestinationDetail, Rating};
use crate::services::ToggleOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Load { destination_id: String },
    Loaded { detail: DestinationDetail },
    LoadFailed { message: String },
    SavedChecked { is_saved: bool, known: bool },

    ToggleStarted,
    Toggled { outcome: ToggleOutcome },
    ToggleFailed { message: String },

    OpenRatingForm,
    CloseRatingForm,
    SetStars { stars: u8 },
    SetComment { comment: String },
    SubmitStarted,
    /// Rejected locally before anything was sent.
    SubmitRejected { message: String },
    Submitted { rating: Rating },
    SubmitFailed { message: String },
    /// Server truth re-fetched after a submission.
    Reconciled { detail: DestinationDetail },

    DismissAlert,
}

impl Intent for DetailIntent {}
