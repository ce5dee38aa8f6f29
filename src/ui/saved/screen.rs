use crate::services::SavedDestinationService;
use crate::ui::mvi::Reducer;
use crate::ui::saved::intent::SavedIntent;
use crate::ui::saved::reducer::SavedReducer;
use crate::ui::saved::state::SavedState;

/// Saved destinations list controller.
pub struct SavedScreen {
    saved: SavedDestinationService,
    state: SavedState,
    next_generation: u64,
}

impl SavedScreen {
    pub fn new(saved: SavedDestinationService) -> Self {
        Self {
            saved,
            state: SavedState::default(),
            next_generation: 0,
        }
    }

    pub fn state(&self) -> &SavedState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: SavedIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SavedReducer::reduce(state, intent);
    }

    pub async fn load(&mut self) -> &SavedState {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.dispatch(SavedIntent::Load { generation });
        self.fetch(generation).await
    }

    /// Re-fetch while keeping the current list on screen.
    pub async fn refresh(&mut self) -> &SavedState {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.dispatch(SavedIntent::Refresh { generation });
        self.fetch(generation).await
    }

    async fn fetch(&mut self, generation: u64) -> &SavedState {
        let intent = match self.saved.list_saved().await {
            Ok(items) => SavedIntent::Loaded { generation, items },
            Err(e) => SavedIntent::LoadFailed {
                generation,
                message: e.display_message(),
            },
        };
        self.dispatch(intent);
        &self.state
    }

    /// Toggle `destination_id` off; the item leaves the list only if the
    /// server reports it unsaved.
    pub async fn remove(&mut self, destination_id: &str) -> &SavedState {
        if self.state.removing.is_some() {
            return &self.state;
        }
        self.dispatch(SavedIntent::RemoveStarted {
            destination_id: destination_id.to_string(),
        });

        let intent = match self.saved.toggle(destination_id).await {
            Ok(outcome) => SavedIntent::Removed {
                destination_id: destination_id.to_string(),
                outcome,
            },
            Err(e) => SavedIntent::RemoveFailed {
                destination_id: destination_id.to_string(),
                message: e.display_message(),
            },
        };
        self.dispatch(intent);
        &self.state
    }
}
