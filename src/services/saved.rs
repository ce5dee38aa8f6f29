use reqwest::Method;
use serde::Deserialize;

use crate::api::envelope::ListEnvelope;
use crate::api::{ApiClient, ApiError, Auth, BestEffort, Endpoint};
use crate::models::SavedDestination;

/// Result of flipping a destination's saved state.
///
/// `is_saved` is the server's verdict; screens display it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    pub is_saved: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckResponse {
    #[serde(default)]
    is_saved: bool,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    #[serde(default)]
    count: u64,
}

/// Saved-destination accessor.
///
/// `list_saved` and `toggle` are authoritative. `is_saved`, `count_for`
/// and `user_count` are best-effort and never fail.
#[derive(Debug, Clone)]
pub struct SavedDestinationService {
    client: ApiClient,
}

impl SavedDestinationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /saved-destinations`
    pub async fn list_saved(&self) -> Result<Vec<SavedDestination>, ApiError> {
        let request = self
            .client
            .request(Method::GET, Endpoint::SavedDestinations, Auth::IfPresent)?;
        let envelope: ListEnvelope<SavedDestination> = self.client.send(request).await?;
        Ok(envelope.data)
    }

    /// `POST /saved-destinations/:id`
    pub async fn toggle(&self, destination_id: &str) -> Result<ToggleOutcome, ApiError> {
        let request = self.client.request(
            Method::POST,
            Endpoint::SavedToggle(destination_id),
            Auth::IfPresent,
        )?;
        self.client.send(request).await
    }

    /// `GET /saved-destinations/check/:id`; `false` on any error.
    pub async fn is_saved(&self, destination_id: &str) -> BestEffort<bool> {
        let result = self.check(destination_id).await;
        BestEffort::from_result(result, false, "saved.is_saved")
    }

    /// `GET /saved-destinations/count/:id`; `0` on any error.
    pub async fn count_for(&self, destination_id: &str) -> BestEffort<u64> {
        let result = self
            .fetch_count(Endpoint::SavedCount(destination_id), Auth::Anonymous)
            .await;
        BestEffort::from_result(result, 0, "saved.count_for")
    }

    /// `GET /saved-destinations/user/count`; `0` on any error.
    pub async fn user_count(&self) -> BestEffort<u64> {
        let result = self
            .fetch_count(Endpoint::SavedUserCount, Auth::Required)
            .await;
        BestEffort::from_result(result, 0, "saved.user_count")
    }

    async fn check(&self, destination_id: &str) -> Result<bool, ApiError> {
        let request = self.client.request(
            Method::GET,
            Endpoint::SavedCheck(destination_id),
            Auth::IfPresent,
        )?;
        let response: CheckResponse = self.client.send(request).await?;
        Ok(response.is_saved)
    }

    async fn fetch_count(&self, endpoint: Endpoint<'_>, auth: Auth) -> Result<u64, ApiError> {
        let request = self.client.request(Method::GET, endpoint, auth)?;
        let response: CountResponse = self.client.send(request).await?;
        Ok(response.count)
    }
}
