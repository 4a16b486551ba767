use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{FoodId, FoodItem};

/// Meal slot a planned entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All slots in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrackerError::InvalidInput(format!("Unknown meal type: {}", s)))
    }
}

/// Handle identifying one planned entry within a working set.
///
/// Two entries for the same food and amount still get distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) u64);

/// One food placed into one meal slot.
#[derive(Debug, Clone)]
pub struct PlannedMealEntry {
    pub entry_id: EntryId,

    /// Copy of the food record taken when the entry was added.
    pub food: FoodItem,

    pub meal_type: MealType,

    /// Serving multiplier: `display_quantity / 100`.
    pub quantity: f64,

    /// Grams as entered.
    pub display_quantity: f64,
}

impl PlannedMealEntry {
    /// Contribution of this entry for a per-serving nutrient value.
    #[inline]
    pub fn contribution(&self, per_serving: f64) -> f64 {
        per_serving * self.quantity
    }
}

/// One `{food_id, quantity, meal_type}` triple of a submitted plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanFood {
    pub food_id: FoodId,
    pub quantity: f64,
    pub meal_type: MealType,
}

/// The shape accepted by `POST /meal-plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub name: String,
    pub foods: Vec<MealPlanFood>,
}
