use crate::models::{DestinationDetail, Rating};
use crate::ui::alert::Alert;
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailState, RatingDraft, RatingEntry, RatingStatus};
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

fn confirmed(ratings: Vec<Rating>) -> Vec<RatingEntry> {
    ratings
        .into_iter()
        .map(|rating| RatingEntry {
            rating,
            status: RatingStatus::Confirmed,
        })
        .collect()
}

fn is_current(state: &DetailState, detail: &DestinationDetail) -> bool {
    state.destination_id == detail.destination.id
}

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Load { destination_id } => DetailState {
                destination_id,
                loading: true,
                ..DetailState::default()
            },
            DetailIntent::Loaded { detail } if !is_current(&state, &detail) => DetailState {
                loading: false,
                alert: Some(Alert::error("Destination not found")),
                ..state
            },
            DetailIntent::Reconciled { detail } if !is_current(&state, &detail) => state,
            DetailIntent::Loaded { detail } | DetailIntent::Reconciled { detail } => DetailState {
                loading: false,
                destination: Some(detail.destination),
                ratings: confirmed(detail.ratings),
                ..state
            },
            DetailIntent::LoadFailed { message } => DetailState {
                loading: false,
                alert: Some(Alert::error(format!(
                    "Failed to load destination details ({message})"
                ))),
                ..state
            },
            DetailIntent::SavedChecked { is_saved, known } => DetailState {
                is_saved,
                saved_known: known,
                ..state
            },
            DetailIntent::ToggleStarted => DetailState {
                saving: true,
                ..state
            },
            DetailIntent::Toggled { outcome } => DetailState {
                saving: false,
                is_saved: outcome.is_saved,
                saved_known: true,
                alert: Some(Alert::success(outcome.message)),
                ..state
            },
            DetailIntent::ToggleFailed { message } => DetailState {
                saving: false,
                alert: Some(Alert::error(format!(
                    "Failed to update saved destination ({message})"
                ))),
                ..state
            },
            DetailIntent::OpenRatingForm => DetailState {
                draft: RatingDraft {
                    open: true,
                    ..state.draft
                },
                ..state
            },
            DetailIntent::CloseRatingForm => DetailState {
                draft: RatingDraft::default(),
                ..state
            },
            DetailIntent::SetStars { stars } => DetailState {
                draft: RatingDraft {
                    stars,
                    ..state.draft
                },
                ..state
            },
            DetailIntent::SetComment { comment } => DetailState {
                draft: RatingDraft {
                    comment,
                    ..state.draft
                },
                ..state
            },
            DetailIntent::SubmitStarted => DetailState {
                submitting: true,
                ..state
            },
            DetailIntent::SubmitRejected { message } => DetailState {
                alert: Some(Alert::error(message)),
                ..state
            },
            DetailIntent::Submitted { rating } => {
                let mut ratings = Vec::with_capacity(state.ratings.len() + 1);
                ratings.push(RatingEntry {
                    rating,
                    status: RatingStatus::Pending,
                });
                ratings.extend(state.ratings);
                DetailState {
                    submitting: false,
                    ratings,
                    draft: RatingDraft::default(),
                    alert: Some(Alert::success("Your rating has been submitted!")),
                    ..state
                }
            }
            DetailIntent::SubmitFailed { message } => DetailState {
                submitting: false,
                alert: Some(Alert::error(message)),
                ..state
            },
            DetailIntent::DismissAlert => DetailState {
                alert: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ToggleOutcome;
    use serde_json::json;

    fn detail(id: &str, average: f64, stars: &[u8]) -> DestinationDetail {
        let ratings: Vec<_> = stars
            .iter()
            .enumerate()
            .map(|(i, s)| {
                json!({
                    "_id": format!("r{i}"),
                    "destinationId": id,
                    "userId": { "_id": "u1", "email": "a@b.c" },
                    "rating": s,
                })
            })
            .collect();
        serde_json::from_value(json!({
            "destination": { "_id": id, "name": "Falls", "averageRating": average },
            "ratings": ratings,
        }))
        .unwrap()
    }

    fn rating(stars: u8) -> Rating {
        serde_json::from_value(json!({
            "_id": "new",
            "destinationId": "d1",
            "userId": { "_id": "u1", "email": "a@b.c" },
            "rating": stars,
            "comment": "lovely",
        }))
        .unwrap()
    }

    fn loaded() -> DetailState {
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::Load {
                destination_id: "d1".into(),
            },
        );
        DetailReducer::reduce(
            state,
            DetailIntent::Loaded {
                detail: detail("d1", 4.0, &[4, 4]),
            },
        )
    }

    #[test]
    fn loaded_ratings_are_confirmed() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.ratings.len(), 2);
        assert!(!state.has_pending());
        assert_eq!(state.average_rating(), Some(4.0));
    }

    #[test]
    fn detail_for_another_destination_is_ignored() {
        let state = DetailReducer::reduce(
            loaded(),
            DetailIntent::Reconciled {
                detail: detail("d2", 1.0, &[1]),
            },
        );
        assert_eq!(state.destination.unwrap().id, "d1");
        assert_eq!(state.ratings.len(), 2);
    }

    #[test]
    fn submitted_rating_is_pending_until_reconciled() {
        let mut state = DetailReducer::reduce(loaded(), DetailIntent::OpenRatingForm);
        state = DetailReducer::reduce(state, DetailIntent::SetStars { stars: 1 });
        state = DetailReducer::reduce(state, DetailIntent::SubmitStarted);
        state = DetailReducer::reduce(state, DetailIntent::Submitted { rating: rating(1) });

        assert!(!state.submitting);
        assert!(!state.draft.open);
        assert_eq!(state.draft.stars, 0);
        assert_eq!(state.ratings[0].status, RatingStatus::Pending);
        assert_eq!(state.average_rating(), Some(3.0));
        assert_eq!(
            state.alert,
            Some(Alert::success("Your rating has been submitted!"))
        );

        state = DetailReducer::reduce(
            state,
            DetailIntent::Reconciled {
                detail: detail("d1", 3.0, &[1, 4, 4]),
            },
        );
        assert!(!state.has_pending());
        assert_eq!(state.ratings.len(), 3);
        assert_eq!(state.average_rating(), Some(3.0));
    }

    #[test]
    fn toggle_follows_server_verdict() {
        let state = DetailReducer::reduce(loaded(), DetailIntent::ToggleStarted);
        assert!(state.saving);
        let state = DetailReducer::reduce(
            state,
            DetailIntent::Toggled {
                outcome: ToggleOutcome {
                    is_saved: true,
                    message: "Destination saved".into(),
                },
            },
        );
        assert!(!state.saving);
        assert!(state.is_saved);
        assert!(state.saved_known);
    }

    #[test]
    fn out_of_range_stars_are_kept_for_validation() {
        let state = DetailReducer::reduce(loaded(), DetailIntent::SetStars { stars: 9 });
        assert_eq!(state.draft.stars, 9);
    }

    #[test]
    fn mismatched_load_stops_loading() {
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::Load {
                destination_id: "d1".into(),
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::Loaded {
                detail: detail("d2", 1.0, &[1]),
            },
        );
        assert!(!state.loading);
        assert!(state.destination.is_none());
        assert_eq!(state.alert, Some(Alert::error("Destination not found")));
    }
}
