use crate::ui::alert::Alert;
use crate::ui::mvi::Reducer;
use crate::ui::saved::intent::SavedIntent;
use crate::ui::saved::state::SavedState;

const LOAD_FAILED: &str = "Failed to load saved destinations";
const REMOVED: &str = "Destination removed from saved list";
const REMOVE_FAILED: &str = "Failed to remove destination";

pub struct SavedReducer;

impl Reducer for SavedReducer {
    type State = SavedState;
    type Intent = SavedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SavedIntent::Load { generation } => {
                if generation <= state.generation {
                    return state;
                }
                SavedState {
                    loading: true,
                    generation,
                    ..state
                }
            }
            SavedIntent::Refresh { generation } => {
                if generation <= state.generation {
                    return state;
                }
                SavedState {
                    refreshing: true,
                    generation,
                    ..state
                }
            }
            SavedIntent::Loaded { generation, items } => {
                if generation != state.generation {
                    return state;
                }
                SavedState {
                    loading: false,
                    refreshing: false,
                    items,
                    ..state
                }
            }
            SavedIntent::LoadFailed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                SavedState {
                    loading: false,
                    refreshing: false,
                    alert: Some(Alert::error(format!("{LOAD_FAILED} ({message})"))),
                    ..state
                }
            }
            SavedIntent::RemoveStarted { destination_id } => SavedState {
                removing: Some(destination_id),
                ..state
            },
            SavedIntent::Removed {
                destination_id,
                outcome,
            } => {
                // A toggle that re-saved the destination leaves the list alone.
                if outcome.is_saved {
                    return SavedState {
                        removing: None,
                        ..state
                    };
                }
                let mut items = state.items;
                items.retain(|d| d.id != destination_id);
                SavedState {
                    items,
                    removing: None,
                    alert: Some(Alert::success(REMOVED)),
                    ..state
                }
            }
            SavedIntent::RemoveFailed {
                destination_id,
                message,
            } => {
                let removing = state.removing.filter(|id| *id != destination_id);
                SavedState {
                    removing,
                    alert: Some(Alert::error(format!("{REMOVE_FAILED} ({message})"))),
                    ..state
                }
            }
            SavedIntent::DismissAlert => SavedState {
                alert: None,
                ..state
            },
        }
    }
}
