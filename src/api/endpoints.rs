//! REST endpoints consumed by the client, relative to the base URL.

/// One remote resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Health,
    Login,
    Register,
    Profile,
    ProfileEmail,
    ProfilePhone,
    ProfileImage,
    ProfileUploadImage,
    Destinations,
    Destination(&'a str),
    DestinationRatings(&'a str),
    SavedDestinations,
    SavedToggle(&'a str),
    SavedCheck(&'a str),
    SavedCount(&'a str),
    SavedUserCount,
}

impl<'a> Endpoint<'a> {
    /// Path segments, unescaped. Ids are percent-encoded when the URL is built.
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Endpoint::Health => vec!["health"],
            Endpoint::Login => vec!["auth", "login"],
            Endpoint::Register => vec!["auth", "register"],
            Endpoint::Profile => vec!["profile"],
            Endpoint::ProfileEmail => vec!["profile", "email"],
            Endpoint::ProfilePhone => vec!["profile", "phone"],
            Endpoint::ProfileImage => vec!["profile", "image"],
            Endpoint::ProfileUploadImage => vec!["profile", "upload-image"],
            Endpoint::Destinations => vec!["destinations"],
            Endpoint::Destination(id) => vec!["destinations", id],
            Endpoint::DestinationRatings(id) => vec!["destinations", id, "ratings"],
            Endpoint::SavedDestinations => vec!["saved-destinations"],
            Endpoint::SavedToggle(id) => vec!["saved-destinations", id],
            Endpoint::SavedCheck(id) => vec!["saved-destinations", "check", id],
            Endpoint::SavedCount(id) => vec!["saved-destinations", "count", id],
            Endpoint::SavedUserCount => vec!["saved-destinations", "user", "count"],
        }
    }

    /// Human-readable path for logs and error messages.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }
}
