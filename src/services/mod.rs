//! Resource accessors, one per resource family.

mod auth;
mod destinations;
mod profile;
mod ratings;
mod saved;

pub use auth::AuthService;
pub use destinations::{filter_category, rank_newest, rank_popular, DestinationService};
pub use profile::ProfileService;
pub use ratings::RatingService;
pub use saved::{SavedDestinationService, ToggleOutcome};

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::session::{FileTokenStore, Session};

/// Every accessor wired to one client and one session.
#[derive(Debug, Clone)]
pub struct Services {
    pub client: ApiClient,
    pub auth: AuthService,
    pub destinations: DestinationService,
    pub ratings: RatingService,
    pub saved: SavedDestinationService,
    pub profile: ProfileService,
}

impl Services {
    /// Build accessors from configuration, persisting the session to disk.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let session = Session::open(FileTokenStore::new(config.session_path()))?;
        Self::with_session(config, Arc::new(session))
    }

    pub fn with_session(config: &Config, session: Arc<Session>) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api, session)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            destinations: DestinationService::new(client.clone()),
            ratings: RatingService::new(client.clone()),
            saved: SavedDestinationService::new(client.clone()),
            profile: ProfileService::new(client.clone()),
            client,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        self.client.session()
    }
}
