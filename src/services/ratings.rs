use reqwest::Method;
use tracing::info;

use crate::api::envelope::{DataEnvelope, ListEnvelope};
use crate::api::{ApiClient, ApiError, Auth, Endpoint};
use crate::models::{NewRating, Rating, Stars};

/// Per-destination rating accessor.
#[derive(Debug, Clone)]
pub struct RatingService {
    client: ApiClient,
}

impl RatingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /destinations/:id/ratings`
    pub async fn list_for_destination(&self, destination_id: &str) -> Result<Vec<Rating>, ApiError> {
        let request = self.client.request(
            Method::GET,
            Endpoint::DestinationRatings(destination_id),
            Auth::IfPresent,
        )?;
        let envelope: ListEnvelope<Rating> = self.client.send(request).await?;
        Ok(envelope.data)
    }

    /// `POST /destinations/:id/ratings`
    ///
    /// Values outside `1..=5` are rejected before anything is sent. The
    /// server assigns id, timestamps and author from the bearer token.
    pub async fn submit(
        &self,
        destination_id: &str,
        rating: u8,
        comment: &str,
    ) -> Result<Rating, ApiError> {
        let stars = Stars::new(rating).ok_or_else(|| {
            ApiError::validation(format!(
                "Rating must be between {} and {}",
                Stars::MIN,
                Stars::MAX
            ))
        })?;

        let body = NewRating {
            rating: stars.get(),
            comment,
        };
        let request = self
            .client
            .request(
                Method::POST,
                Endpoint::DestinationRatings(destination_id),
                Auth::IfPresent,
            )?
            .json(&body);

        let envelope: DataEnvelope<Rating> = self.client.send(request).await?;
        info!(destination_id, rating = stars.get(), "rating submitted");
        Ok(envelope.data)
    }
}
