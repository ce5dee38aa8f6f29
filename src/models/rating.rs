use serde::{Deserialize, Serialize};

/// A user's rating of a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub destination_id: String,
    pub user_id: RatingAuthor,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: String,
}

/// The rating's author, as populated by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingAuthor {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Star value accepted by the rating endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stars(u8);

impl Stars {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` outside `1..=5`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Body of `POST /destinations/:id/ratings`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRating<'a> {
    pub rating: u8,
    pub comment: &'a str,
}

/// Arithmetic mean of the star values, or `None` for an empty slice.
pub fn mean_rating<'a>(ratings: impl IntoIterator<Item = &'a Rating>) -> Option<f64> {
    let (sum, count) = ratings
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r.rating), count + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}
