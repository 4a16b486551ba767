use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::metrics::{MAX_ENTRY_GRAMS, MIN_ENTRY_GRAMS};
use crate::models::{EntryId, FoodDraft, FoodItem, MealType};
use crate::state::MealPlanner;

/// Minimum Jaro-Winkler similarity for a fuzzy picker match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Most candidates offered by the picker at once.
const MAX_CANDIDATES: usize = 10;

/// Actions offered by the interactive meal planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    AddFood,
    RemoveFood,
    SetName,
    Save,
    Refresh,
    Quit,
}

impl PlanAction {
    const ALL: [PlanAction; 6] = [
        PlanAction::AddFood,
        PlanAction::RemoveFood,
        PlanAction::SetName,
        PlanAction::Save,
        PlanAction::Refresh,
        PlanAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            PlanAction::AddFood => "Add food",
            PlanAction::RemoveFood => "Remove food",
            PlanAction::SetName => "Set plan name",
            PlanAction::Save => "Save meal plan",
            PlanAction::Refresh => "Refresh food list",
            PlanAction::Quit => "Quit",
        }
    }
}

/// Parse a number and check it lies in `min..=max`.
pub fn parse_bounded(input: &str, min: f64, max: f64) -> std::result::Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;

    if !value.is_finite() || value < min || value > max {
        return Err(format!("Enter a value between {} and {}", min, max));
    }

    Ok(value)
}

/// Parse a gram amount for a meal-plan entry.
pub fn parse_grams(input: &str) -> std::result::Result<f64, String> {
    parse_bounded(input, MIN_ENTRY_GRAMS, MAX_ENTRY_GRAMS)
}

/// Parse an optional non-negative number; blank means absent.
pub fn parse_optional(input: &str) -> std::result::Result<Option<f64>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_bounded(input, 0.0, f64::MAX).map(Some)
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn prompt_number(prompt: &str, initial: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format_number(initial))
        .validate_with(|s: &String| parse_bounded(s, 0.0, f64::MAX).map(|_| ()))
        .interact_text()?;

    parse_bounded(&input, 0.0, f64::MAX).map_err(TrackerError::InvalidInput)
}

fn prompt_optional_number(prompt: &str, initial: Option<f64>) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (blank for none)", prompt))
        .with_initial_text(initial.map(format_number).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|s: &String| parse_optional(s).map(|_| ()))
        .interact_text()?;

    parse_optional(&input).map_err(TrackerError::InvalidInput)
}

fn prompt_optional_text(prompt: &str, initial: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (blank for none)", prompt))
        .with_initial_text(initial.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Fill in a food form, prefilled from `initial`.
pub fn prompt_food_draft(initial: &FoodDraft) -> Result<FoodDraft> {
    let name: String = Input::new()
        .with_prompt("Name")
        .with_initial_text(initial.name.clone())
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("Name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(FoodDraft {
        name: name.trim().to_string(),
        brand: prompt_optional_text("Brand", initial.brand.as_deref())?,
        serving_size: prompt_number("Serving size (g)", initial.serving_size)?,
        calories: prompt_number("Calories", initial.calories)?,
        protein: prompt_number("Protein (g)", initial.protein)?,
        carbohydrates: prompt_number("Carbohydrates (g)", initial.carbohydrates)?,
        fats: prompt_number("Fats (g)", initial.fats)?,
        fiber: prompt_optional_number("Fiber (g)", initial.fiber)?,
        sugar: prompt_optional_number("Sugar (g)", initial.sugar)?,
        price: prompt_number("Price", initial.price)?,
        store: prompt_optional_text("Store", initial.store.as_deref())?,
    })
}

/// Foods matching a search string.
///
/// Case-insensitive substring matches on the display label come first, in
/// input order. Only when there are none, labels with a Jaro-Winkler
/// similarity above 0.7 are returned, most similar first.
pub fn match_foods<'a>(foods: &'a [FoodItem], query: &str) -> Vec<&'a FoodItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return foods.iter().collect();
    }

    let substring: Vec<&FoodItem> = foods
        .iter()
        .filter(|f| f.display_label().to_lowercase().contains(&query))
        .collect();
    if !substring.is_empty() {
        return substring;
    }

    let mut candidates: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.into_iter().map(|(f, _)| f).collect()
}

/// Search the snapshot and let the user pick one food.
pub fn pick_food(foods: &[FoodItem]) -> Result<Option<&FoodItem>> {
    if foods.is_empty() {
        println!("No foods loaded.");
        return Ok(None);
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Search foods (Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(None);
        }

        let matches = match_foods(foods, &input);
        if matches.is_empty() {
            println!("No matching food found for '{}'", input.trim());
            continue;
        }

        let options: Vec<String> = matches
            .iter()
            .take(MAX_CANDIDATES)
            .map(|f| f.display_label())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which food?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(matches[selection]));
        }
    }
}

pub fn prompt_meal_type() -> Result<MealType> {
    let selection = Select::new()
        .with_prompt("Meal")
        .items(&MealType::ALL)
        .default(0)
        .interact()?;

    Ok(MealType::ALL[selection])
}

/// Prompt for a gram amount within the entry bounds.
pub fn prompt_grams() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Quantity in grams ({}-{})",
            MIN_ENTRY_GRAMS, MAX_ENTRY_GRAMS
        ))
        .default("100".to_string())
        .validate_with(|s: &String| parse_grams(s).map(|_| ()))
        .interact_text()?;

    parse_grams(&input).map_err(TrackerError::InvalidInput)
}

pub fn prompt_plan_name(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Meal plan name")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

pub fn prompt_plan_action() -> Result<PlanAction> {
    let labels: Vec<&str> = PlanAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(PlanAction::ALL[selection])
}

/// Let the user pick one planned entry to remove.
pub fn pick_entry(planner: &MealPlanner) -> Result<Option<EntryId>> {
    if planner.is_empty() {
        println!("The meal plan is empty.");
        return Ok(None);
    }

    let mut options: Vec<String> = planner
        .entries()
        .iter()
        .map(|e| {
            format!(
                "{}: {} ({:.0}g)",
                e.meal_type,
                e.food.display_label(),
                e.display_quantity
            )
        })
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which entry?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(planner.entries().get(selection).map(|e| e.entry_id))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
