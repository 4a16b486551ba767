use tracing::{info, warn};

use crate::api::FoodStore;
use crate::error::{Result, TrackerError};
use crate::metrics::constants::{
    DAILY_CALORIES, DAILY_CARBS, DAILY_FATS, DAILY_PROTEIN, GRAMS_PER_SERVING,
};
use crate::models::{EntryId, FoodItem, MealPlan, MealPlanFood, MealType, PlannedMealEntry};

/// Daily intake targets the working set is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            calories: DAILY_CALORIES,
            protein: DAILY_PROTEIN,
            carbs: DAILY_CARBS,
            fats: DAILY_FATS,
        }
    }
}

impl DailyTargets {
    pub fn validate(&self) -> Result<()> {
        let all = [self.calories, self.protein, self.carbs, self.fats];
        if all.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(TrackerError::Config(
                "Daily targets must be positive numbers".to_string(),
            ));
        }
        Ok(())
    }
}

/// Nutrients tracked against a daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedNutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl TrackedNutrient {
    pub const ALL: [TrackedNutrient; 4] = [
        TrackedNutrient::Calories,
        TrackedNutrient::Protein,
        TrackedNutrient::Carbs,
        TrackedNutrient::Fats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrackedNutrient::Calories => "Calories",
            TrackedNutrient::Protein => "Protein",
            TrackedNutrient::Carbs => "Carbs",
            TrackedNutrient::Fats => "Fats",
        }
    }

    /// Display unit ("" for calories).
    pub fn unit(&self) -> &'static str {
        match self {
            TrackedNutrient::Calories => "",
            _ => "g",
        }
    }
}

/// Summed intake of the working set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    pub fn get(&self, nutrient: TrackedNutrient) -> f64 {
        match nutrient {
            TrackedNutrient::Calories => self.calories,
            TrackedNutrient::Protein => self.protein,
            TrackedNutrient::Carbs => self.carbs,
            TrackedNutrient::Fats => self.fats,
        }
    }
}

/// Progress of one nutrient toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetProgress {
    pub nutrient: TrackedNutrient,
    /// Uncapped intake.
    pub total: f64,
    pub target: f64,
    /// Rounded percentage, capped at 100.
    pub percent: u32,
}

/// `min(round(100 * total / target), 100)`.
pub fn percent_of_target(total: f64, target: f64) -> u32 {
    let pct = (100.0 * total / target).round();
    if pct.is_nan() || pct <= 0.0 {
        0
    } else {
        pct.min(100.0) as u32
    }
}

/// Client-local meal plan being assembled.
#[derive(Debug, Clone)]
pub struct MealPlanner {
    entries: Vec<PlannedMealEntry>,
    plan_name: String,
    targets: DailyTargets,
    next_entry: u64,
}

impl Default for MealPlanner {
    fn default() -> Self {
        Self::new(DailyTargets::default())
    }
}

impl MealPlanner {
    pub fn new(targets: DailyTargets) -> Self {
        Self {
            entries: Vec::new(),
            plan_name: String::new(),
            targets,
            next_entry: 0,
        }
    }

    pub fn targets(&self) -> &DailyTargets {
        &self.targets
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn set_plan_name(&mut self, name: impl Into<String>) {
        self.plan_name = name.into();
    }

    /// Add `grams` of a food to a meal slot.
    ///
    /// The food record is copied; later changes to the catalogue do not
    /// affect the entry.
    pub fn add(&mut self, food: &FoodItem, meal_type: MealType, grams: f64) -> Result<EntryId> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(TrackerError::InvalidInput(format!(
                "Quantity must be a positive number of grams, got {}",
                grams
            )));
        }

        let entry_id = EntryId(self.next_entry);
        self.next_entry += 1;

        self.entries.push(PlannedMealEntry {
            entry_id,
            food: food.clone(),
            meal_type,
            quantity: grams / GRAMS_PER_SERVING,
            display_quantity: grams,
        });

        Ok(entry_id)
    }

    /// Remove exactly the entry with this handle.
    pub fn remove(&mut self, entry_id: EntryId) -> Option<PlannedMealEntry> {
        let index = self.entries.iter().position(|e| e.entry_id == entry_id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[PlannedMealEntry] {
        &self.entries
    }

    /// Entries of one slot, in insertion order.
    pub fn entries_for(&self, meal_type: MealType) -> Vec<&PlannedMealEntry> {
        self.entries
            .iter()
            .filter(|e| e.meal_type == meal_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of `value * quantity` over every entry, all slots together.
    pub fn totals(&self) -> MacroTotals {
        self.entries
            .iter()
            .fold(MacroTotals::default(), |mut acc, entry| {
                acc.calories += entry.contribution(entry.food.calories);
                acc.protein += entry.contribution(entry.food.protein);
                acc.carbs += entry.contribution(entry.food.carbohydrates);
                acc.fats += entry.contribution(entry.food.fats);
                acc
            })
    }

    /// Progress toward each daily target.
    pub fn progress(&self) -> Vec<TargetProgress> {
        let totals = self.totals();
        TrackedNutrient::ALL
            .into_iter()
            .map(|nutrient| {
                let target = match nutrient {
                    TrackedNutrient::Calories => self.targets.calories,
                    TrackedNutrient::Protein => self.targets.protein,
                    TrackedNutrient::Carbs => self.targets.carbs,
                    TrackedNutrient::Fats => self.targets.fats,
                };
                let total = totals.get(nutrient);
                TargetProgress {
                    nutrient,
                    total,
                    target,
                    percent: percent_of_target(total, target),
                }
            })
            .collect()
    }

    /// The submission shape: only `food_id`, `quantity`, and `meal_type` per entry.
    pub fn to_meal_plan(&self) -> Result<MealPlan> {
        let name = self.plan_name.trim();
        if name.is_empty() {
            return Err(TrackerError::MissingPlanName);
        }

        Ok(MealPlan {
            name: name.to_string(),
            foods: self
                .entries
                .iter()
                .map(|e| MealPlanFood {
                    food_id: e.food.id,
                    quantity: e.quantity,
                    meal_type: e.meal_type,
                })
                .collect(),
        })
    }

    /// Submit the plan. Clears the working set and name only on success.
    pub async fn save<S: FoodStore>(&mut self, store: &S) -> Result<MealPlan> {
        let plan = self.to_meal_plan()?;

        match store.create_meal_plan(&plan).await {
            Ok(()) => {
                info!(name = %plan.name, foods = plan.foods.len(), "meal plan saved");
                self.entries.clear();
                self.plan_name.clear();
                Ok(plan)
            }
            Err(e) => {
                warn!(name = %plan.name, "meal plan not saved, keeping entries: {}", e);
                Err(e)
            }
        }
    }
}
