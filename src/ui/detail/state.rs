use crate::models::{mean_rating, Destination, Rating};
use crate::ui::alert::Alert;
use crate::ui::mvi::UiState;

/// Whether a rating in the list has been confirmed by a re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStatus {
    /// Accepted by the server but added locally; not yet seen in a re-fetch.
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingEntry {
    pub rating: Rating,
    pub status: RatingStatus,
}

/// The rating form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingDraft {
    pub open: bool,
    /// 0 means no star selected yet.
    pub stars: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub destination_id: String,
    pub loading: bool,
    pub destination: Option<Destination>,
    pub ratings: Vec<RatingEntry>,
    pub is_saved: bool,
    /// False when `is_saved` is the fallback of a failed check.
    pub saved_known: bool,
    pub saving: bool,
    pub submitting: bool,
    pub draft: RatingDraft,
    pub alert: Option<Alert>,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn has_pending(&self) -> bool {
        self.ratings
            .iter()
            .any(|entry| entry.status == RatingStatus::Pending)
    }

    /// Average to display.
    ///
    /// The server's `averageRating` while every rating is confirmed; a local
    /// mean over the held ratings while some are still pending.
    pub fn average_rating(&self) -> Option<f64> {
        let server = self.destination.as_ref().map(|d| d.average_rating);
        if !self.has_pending() {
            return server;
        }
        mean_rating(self.ratings.iter().map(|entry| &entry.rating)).or(server)
    }
}
