use serde::{Deserialize, Serialize};

/// The signed-in user's profile. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub member_since: Option<String>,
    pub trips_completed: Option<u32>,
    pub total_distance: Option<String>,
    pub profile_image: Option<String>,
}
