pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{FoodDraft, FoodId, FoodItem, MealPlan, MealType};
