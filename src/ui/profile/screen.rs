use tracing::warn;

use crate::api::ApiError;
use crate::services::{AuthService, ProfileService, SavedDestinationService};
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::reducer::ProfileReducer;
use crate::ui::profile::state::{EditField, ProfileState};

const UPLOAD_FAILED: &str = "Failed to upload image. Please try again.";

/// Profile controller: profile card, email/phone edits, picture upload and
/// logout.
pub struct ProfileScreen {
    profile: ProfileService,
    saved: SavedDestinationService,
    auth: AuthService,
    state: ProfileState,
}

impl ProfileScreen {
    pub fn new(profile: ProfileService, saved: SavedDestinationService, auth: AuthService) -> Self {
        Self {
            profile,
            saved,
            auth,
            state: ProfileState::default(),
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: ProfileIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ProfileReducer::reduce(state, intent);
    }

    /// Fetch the profile, then the saved count. A failed count shows 0.
    pub async fn load(&mut self) -> &ProfileState {
        self.dispatch(ProfileIntent::Load);
        let intent = match self.profile.get().await {
            Ok(profile) => ProfileIntent::Loaded {
                profile,
                saved_count: self.saved.user_count().await.into_value(),
            },
            Err(e) if e.is_auth_failure() => ProfileIntent::SessionEnded,
            Err(e) => ProfileIntent::LoadFailed {
                message: e.display_message(),
            },
        };
        self.dispatch(intent);
        &self.state
    }

    /// Save the draft of the open edit dialog.
    pub async fn submit_edit(&mut self) -> &ProfileState {
        let Some(field) = self.state.editing else {
            return &self.state;
        };
        if self.state.updating {
            return &self.state;
        }
        self.dispatch(ProfileIntent::UpdateStarted);

        let draft = self.state.draft.trim().to_string();
        let result = match field {
            EditField::Email => self.profile.update_email(&draft).await,
            EditField::Phone => self.profile.update_phone(&draft).await,
        };

        let intent = match result {
            Ok(value) => ProfileIntent::Updated { field, value },
            Err(e) if e.is_auth_failure() => ProfileIntent::SessionEnded,
            Err(e) => ProfileIntent::UpdateFailed {
                message: update_failure_message(field, &e),
            },
        };
        self.dispatch(intent);
        &self.state
    }

    /// Upload a JPEG as the profile picture and reload the profile.
    pub async fn upload_image(&mut self, jpeg: Vec<u8>) -> &ProfileState {
        if self.state.uploading {
            return &self.state;
        }
        self.dispatch(ProfileIntent::UploadStarted);

        match self.profile.upload_image(jpeg).await {
            Ok(_) => {
                // A failed reload keeps its own alert.
                self.load().await;
                if !self.state.needs_login && self.state.alert.is_none() {
                    self.dispatch(ProfileIntent::Uploaded);
                }
            }
            Err(e) if e.is_auth_failure() => self.dispatch(ProfileIntent::SessionEnded),
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "profile image upload failed");
                self.dispatch(ProfileIntent::UploadFailed {
                    message: UPLOAD_FAILED.to_string(),
                });
            }
        }
        &self.state
    }

    pub fn logout(&mut self) -> &ProfileState {
        if let Err(e) = self.auth.logout() {
            warn!(error = %e, "failed to clear stored session");
        }
        self.dispatch(ProfileIntent::LoggedOut);
        &self.state
    }
}

fn update_failure_message(field: EditField, error: &ApiError) -> String {
    match error {
        ApiError::Api { .. } | ApiError::Validation { .. } => error.display_message(),
        _ => format!("Failed to update {}. Please try again.", field.label()),
    }
}
