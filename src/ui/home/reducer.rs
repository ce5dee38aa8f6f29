use crate::ui::alert::Alert;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

const LOAD_ERROR: &str = "Failed to load destinations. Please try again.";
const LOAD_ALERT: &str = "Failed to load destinations. Please check your connection and try again.";

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::Refresh { generation } => {
                if generation <= state.generation {
                    return state;
                }
                HomeState {
                    loading: true,
                    error: None,
                    generation,
                    ..state
                }
            }
            HomeIntent::Loaded {
                generation,
                popular,
                newest,
            } => {
                if generation != state.generation {
                    return state;
                }
                HomeState {
                    loading: false,
                    popular,
                    newest,
                    error: None,
                    ..state
                }
            }
            HomeIntent::Failed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                HomeState {
                    loading: false,
                    error: Some(LOAD_ERROR.to_string()),
                    alert: Some(Alert::error(format!("{LOAD_ALERT} ({message})"))),
                    ..state
                }
            }
            HomeIntent::SelectCategory { category } => HomeState {
                category,
                category_results: Vec::new(),
                ..state
            },
            HomeIntent::CategoryLoaded {
                category,
                destinations,
            } => {
                if state.category.as_deref() != Some(category.as_str()) {
                    return state;
                }
                HomeState {
                    category_results: destinations,
                    ..state
                }
            }
            HomeIntent::CategoryFailed { category, message } => {
                if state.category.as_deref() != Some(category.as_str()) {
                    return state;
                }
                HomeState {
                    alert: Some(Alert::error(message)),
                    ..state
                }
            }
            HomeIntent::DismissAlert => HomeState {
                alert: None,
                ..state
            },
        }
    }
}
