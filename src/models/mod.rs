mod food;
mod plan;

pub use food::{FoodDraft, FoodId, FoodItem};
pub use plan::{EntryId, MealPlan, MealPlanFood, MealType, PlannedMealEntry};
