use crate::models::Profile;
use crate::ui::mvi::Intent;
use crate::ui::profile::state::EditField;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Load,
    Loaded { profile: Profile, saved_count: u64 },
    LoadFailed { message: String },
    /// Token missing or rejected.
    SessionEnded,

    StartEdit { field: EditField },
    SetDraft { text: String },
    CancelEdit,
    UpdateStarted,
    /// `value` is what the server stored.
    Updated { field: EditField, value: String },
    UpdateFailed { message: String },

    UploadStarted,
    Uploaded,
    UploadFailed { message: String },

    LoggedOut,
    DismissAlert,
}

impl Intent for ProfileIntent {}
