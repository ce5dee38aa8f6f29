use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rating::Rating;

/// A travel destination as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photos: Photos,
    #[serde(default)]
    pub geo: GeoPoint,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Membership in the user's saved set carries the full destination.
pub type SavedDestination = Destination;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photos {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub others: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// `GET /destinations/:id` payload: the destination with its ratings embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationDetail {
    pub destination: Destination,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Destination {
    /// `createdAt` parsed as an RFC 3339 timestamp.
    ///
    /// Returns `None` for missing or malformed values.
    pub fn created_at_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// Case-insensitive exact category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Google Maps search URL for this destination's coordinates.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.geo.lat, self.geo.lng
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "_id": "665f1c2e",
            "name": "Kawasan Falls",
            "photos": {"main": "https://img/main.jpg", "others": ["https://img/1.jpg"]},
            "geo": {"lat": 9.8, "lng": 123.37},
            "category": "Waterfalls",
            "averageRating": 4.6,
            "description": "Turquoise cascades",
            "tags": ["swimming"],
            "createdAt": "2024-05-01T08:30:00.000Z",
            "updatedAt": "2024-05-02T08:30:00.000Z"
        })
    }

    #[test]
    fn deserializes_server_shape() {
        let dest: Destination = serde_json::from_value(sample()).unwrap();
        assert_eq!(dest.id, "665f1c2e");
        assert_eq!(dest.photos.others.len(), 1);
        assert_eq!(dest.average_rating, 4.6);
        assert!(dest.address.is_none());
        assert!(dest.created_at_timestamp().is_some());
    }

    #[test]
    fn malformed_created_at_has_no_timestamp() {
        let mut value = sample();
        value["createdAt"] = json!("yesterday");
        let dest: Destination = serde_json::from_value(value).unwrap();
        assert!(dest.created_at_timestamp().is_none());
    }

    #[test]
    fn category_match_ignores_case() {
        let dest: Destination = serde_json::from_value(sample()).unwrap();
        assert!(dest.in_category("waterfalls"));
        assert!(!dest.in_category("waterfall"));
    }

    #[test]
    fn maps_url_uses_coordinates() {
        let dest: Destination = serde_json::from_value(sample()).unwrap();
        assert_eq!(
            dest.maps_url(),
            "https://www.google.com/maps/search/?api=1&query=9.8,123.37"
        );
    }
}
