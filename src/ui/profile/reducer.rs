use crate::ui::alert::Alert;
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::{EditField, ProfileState, ProfileView};

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Load => ProfileState {
                loading: true,
                ..state
            },
            ProfileIntent::Loaded {
                profile,
                saved_count,
            } => ProfileState {
                loading: false,
                view: Some(ProfileView::new(profile, saved_count)),
                ..state
            },
            ProfileIntent::LoadFailed { message } => ProfileState {
                loading: false,
                uploading: false,
                alert: Some(Alert::error(format!(
                    "Failed to load profile. Please try again. ({message})"
                ))),
                ..state
            },
            ProfileIntent::SessionEnded | ProfileIntent::LoggedOut => ProfileState {
                needs_login: true,
                ..ProfileState::default()
            },
            ProfileIntent::StartEdit { field } => {
                let current = state.view.as_ref().map(|view| match field {
                    EditField::Email => view.email.clone(),
                    EditField::Phone => view.phone.clone(),
                });
                ProfileState {
                    editing: Some(field),
                    draft: current.unwrap_or_default(),
                    ..state
                }
            }
            ProfileIntent::SetDraft { text } => ProfileState {
                draft: text,
                ..state
            },
            ProfileIntent::CancelEdit => ProfileState {
                editing: None,
                draft: String::new(),
                ..state
            },
            ProfileIntent::UpdateStarted => ProfileState {
                updating: true,
                ..state
            },
            ProfileIntent::Updated { field, value } => {
                let mut view = state.view;
                if let Some(view) = view.as_mut() {
                    match field {
                        EditField::Email => view.email = value,
                        EditField::Phone => view.phone = value,
                    }
                }
                let message = match field {
                    EditField::Email => "Email updated successfully!",
                    EditField::Phone => "Phone number updated successfully!",
                };
                ProfileState {
                    view,
                    editing: None,
                    draft: String::new(),
                    updating: false,
                    alert: Some(Alert::success(message)),
                    ..state
                }
            }
            ProfileIntent::UpdateFailed { message } => ProfileState {
                updating: false,
                alert: Some(Alert::error(message)),
                ..state
            },
            ProfileIntent::UploadStarted => ProfileState {
                uploading: true,
                alert: None,
                ..state
            },
            ProfileIntent::Uploaded => ProfileState {
                uploading: false,
                alert: Some(Alert::success("Profile picture updated successfully!")),
                ..state
            },
            ProfileIntent::UploadFailed { message } => ProfileState {
                uploading: false,
                alert: Some(Alert::error(message)),
                ..state
            },
            ProfileIntent::DismissAlert => ProfileState {
                alert: None,
                ..state
            },
        }
    }
}
