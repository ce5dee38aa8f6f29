use tracing::warn;

use crate::api::ApiError;
use crate::services::{DestinationService, RatingService, SavedDestinationService};
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::reducer::DetailReducer;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

const SUBMIT_FAILED: &str = "Failed to submit rating. Please check your connection and try again.";

/// Destination detail controller: the destination, its ratings, the saved
/// toggle and the rating form.
pub struct DetailScreen {
    destinations: DestinationService,
    ratings: RatingService,
    saved: SavedDestinationService,
    state: DetailState,
}

impl DetailScreen {
    pub fn new(
        destinations: DestinationService,
        ratings: RatingService,
        saved: SavedDestinationService,
    ) -> Self {
        Self {
            destinations,
            ratings,
            saved,
            state: DetailState::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: DetailIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = DetailReducer::reduce(state, intent);
    }

    /// Load the destination and its saved flag concurrently.
    pub async fn open(&mut self, destination_id: &str) -> &DetailState {
        self.dispatch(DetailIntent::Load {
            destination_id: destination_id.to_string(),
        });

        let (detail, saved) = tokio::join!(
            self.destinations.get_by_id(destination_id),
            self.saved.is_saved(destination_id),
        );

        match detail {
            Ok(detail) => self.dispatch(DetailIntent::Loaded { detail }),
            Err(e) => self.dispatch(DetailIntent::LoadFailed {
                message: e.display_message(),
            }),
        }
        self.dispatch(DetailIntent::SavedChecked {
            known: saved.is_authoritative(),
            is_saved: saved.into_value(),
        });
        &self.state
    }

    pub async fn toggle_saved(&mut self) -> &DetailState {
        if self.state.saving || self.state.destination_id.is_empty() {
            return &self.state;
        }
        self.dispatch(DetailIntent::ToggleStarted);

        let intent = match self.saved.toggle(&self.state.destination_id).await {
            Ok(outcome) => DetailIntent::Toggled { outcome },
            Err(e) => DetailIntent::ToggleFailed {
                message: e.display_message(),
            },
        };
        self.dispatch(intent);
        &self.state
    }

    /// Submit the current draft, then re-fetch to confirm it.
    pub async fn submit_rating(&mut self) -> &DetailState {
        if self.state.submitting {
            return &self.state;
        }
        if self.state.draft.stars == 0 {
            self.dispatch(DetailIntent::SubmitRejected {
                message: "Please select a rating".to_string(),
            });
            return &self.state;
        }

        self.dispatch(DetailIntent::SubmitStarted);
        let destination_id = self.state.destination_id.clone();
        let draft = self.state.draft.clone();

        let rating = match self
            .ratings
            .submit(&destination_id, draft.stars, &draft.comment)
            .await
        {
            Ok(rating) => rating,
            Err(e) => {
                self.dispatch(DetailIntent::SubmitFailed {
                    message: submit_failure_message(&e),
                });
                return &self.state;
            }
        };
        self.dispatch(DetailIntent::Submitted { rating });

        match self.destinations.get_by_id(&destination_id).await {
            Ok(detail) => self.dispatch(DetailIntent::Reconciled { detail }),
            Err(e) => warn!(
                destination_id = %destination_id,
                error = %e,
                "rating reconcile failed; keeping pending entries"
            ),
        }
        &self.state
    }
}

fn submit_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation { .. } => error.display_message(),
        e if e.is_auth_failure() => e.display_message(),
        _ => SUBMIT_FAILED.to_string(),
    }
}
