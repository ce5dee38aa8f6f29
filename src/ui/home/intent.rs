use crate::models::Destination;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    Refresh {
        generation: u64,
    },
    Loaded {
        generation: u64,
        popular: Vec<Destination>,
        newest: Vec<Destination>,
    },
    Failed {
        generation: u64,
        message: String,
    },
    /// `None` clears the category filter.
    SelectCategory {
        category: Option<String>,
    },
    CategoryLoaded {
        category: String,
        destinations: Vec<Destination>,
    },
    CategoryFailed {
        category: String,
        message: String,
    },
    DismissAlert,
}

impl Intent for HomeIntent {}
