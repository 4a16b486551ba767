mod client;

pub use client::{FoodApiClient, error_message};

use crate::error::Result;
use crate::models::{FoodItem, MealPlan};

/// The parts of the REST store the snapshot and meal planner depend on.
#[allow(async_fn_in_trait)]
pub trait FoodStore {
    /// Fetch the whole food catalogue.
    async fn list_foods(&self) -> Result<Vec<FoodItem>>;

    /// Submit a meal plan.
    async fn create_meal_plan(&self, plan: &MealPlan) -> Result<()>;
}
