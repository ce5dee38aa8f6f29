use crate::models::Profile;
use crate::ui::alert::Alert;
use crate::ui::mvi::UiState;

/// Profile with display defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub member_since: String,
    pub trips_completed: u32,
    pub total_distance: String,
    pub profile_image: Option<String>,
    pub saved_count: u64,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProfileView {
    pub fn new(profile: Profile, saved_count: u64) -> Self {
        Self {
            name: non_empty(profile.name).unwrap_or_else(|| "User".to_string()),
            email: profile.email.unwrap_or_default(),
            phone: profile.phone.unwrap_or_default(),
            location: non_empty(profile.location).unwrap_or_else(|| "Philippines".to_string()),
            member_since: non_empty(profile.member_since)
                .unwrap_or_else(|| "Recently".to_string()),
            trips_completed: profile.trips_completed.unwrap_or(0),
            total_distance: non_empty(profile.total_distance)
                .unwrap_or_else(|| "0 km".to_string()),
            profile_image: non_empty(profile.profile_image),
            saved_count,
        }
    }

    pub fn phone_display(&self) -> &str {
        if self.phone.is_empty() {
            "Not set"
        } else {
            &self.phone
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Email,
    Phone,
}

impl EditField {
    pub fn label(self) -> &'static str {
        match self {
            EditField::Email => "email",
            EditField::Phone => "phone number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub loading: bool,
    pub view: Option<ProfileView>,
    /// Field whose edit dialog is open, with its draft text.
    pub editing: Option<EditField>,
    pub draft: String,
    pub updating: bool,
    pub uploading: bool,
    pub alert: Option<Alert>,
    /// Set when the session is gone and the login screen should be shown.
    pub needs_login: bool,
}

impl UiState for ProfileState {}
