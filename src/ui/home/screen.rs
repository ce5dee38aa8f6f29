use crate::api::ApiError;
use crate::config::FeedConfig;
use crate::models::Destination;
use crate::services::DestinationService;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::reducer::HomeReducer;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

/// Home feed controller: popular and new destinations plus category chips.
pub struct HomeScreen {
    destinations: DestinationService,
    feed: FeedConfig,
    state: HomeState,
    next_generation: u64,
}

impl HomeScreen {
    pub fn new(destinations: DestinationService, feed: FeedConfig) -> Self {
        Self {
            destinations,
            feed,
            state: HomeState::default(),
            next_generation: 0,
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: HomeIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = HomeReducer::reduce(state, intent);
    }

    /// Start a load and return its generation.
    pub fn begin_refresh(&mut self) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.dispatch(HomeIntent::Refresh { generation });
        generation
    }

    /// Fetch both rows concurrently; fails if either fails.
    pub async fn fetch(&self) -> Result<(Vec<Destination>, Vec<Destination>), ApiError> {
        tokio::try_join!(
            self.destinations.list_popular(self.feed.popular_limit),
            self.destinations.list_new(self.feed.new_limit),
        )
    }

    /// Apply the outcome of the load tagged `generation`.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<(Vec<Destination>, Vec<Destination>), ApiError>,
    ) {
        let intent = match result {
            Ok((popular, newest)) => HomeIntent::Loaded {
                generation,
                popular,
                newest,
            },
            Err(e) => HomeIntent::Failed {
                generation,
                message: e.display_message(),
            },
        };
        self.dispatch(intent);
    }

    pub async fn refresh(&mut self) -> &HomeState {
        let generation = self.begin_refresh();
        let result = self.fetch().await;
        self.apply(generation, result);
        &self.state
    }

    pub async fn select_category(&mut self, category: Option<String>) -> &HomeState {
        self.dispatch(HomeIntent::SelectCategory {
            category: category.clone(),
        });
        let Some(category) = category else {
            return &self.state;
        };

        let intent = match self.destinations.list_by_category(&category).await {
            Ok(destinations) => HomeIntent::CategoryLoaded {
                category,
                destinations,
            },
            Err(e) => HomeIntent::CategoryFailed {
                category,
                message: e.display_message(),
            },
        };
        self.dispatch(intent);
        &self.state
    }
}
