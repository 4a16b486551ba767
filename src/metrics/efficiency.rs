use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::metrics::constants::TOP_N;
use crate::models::FoodItem;

/// Named scalar picked out of a collection.
///
/// The default (empty name, value 0) is the result for an empty collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Best {
    pub name: String,
    pub value: f64,
}

/// Share of each macro in the summed macro total, in percent (one decimal).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroComposition {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
}

impl MacroComposition {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fats + self.fiber
    }
}

/// Window applied to `created_at` before aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    All,
    Month,
    Week,
}

impl TimeRange {
    fn window(&self) -> Option<Duration> {
        match self {
            TimeRange::All => None,
            TimeRange::Month => Some(Duration::days(30)),
            TimeRange::Week => Some(Duration::days(7)),
        }
    }

    /// Foods created inside the window ending at `now`.
    ///
    /// Records without a creation time only pass [`TimeRange::All`].
    pub fn filter<'a>(&self, foods: &'a [FoodItem], now: DateTime<Utc>) -> Vec<&'a FoodItem> {
        match self.window() {
            None => foods.iter().collect(),
            Some(window) => {
                let cutoff = now - window;
                foods
                    .iter()
                    .filter(|f| f.created_at.is_some_and(|t| t >= cutoff))
                    .collect()
            }
        }
    }
}

/// Aggregates shown by the analytics view.
#[derive(Debug, Clone)]
pub struct AnalyticsSummary<'a> {
    pub food_count: usize,
    pub average_protein_per_dollar: f64,
    pub average_calories_per_dollar: f64,
    pub average_price: f64,
    pub best_protein_value: Best,
    pub best_calorie_value: Best,
    pub best_nutrient_density: Best,
    pub top_protein_foods: Vec<&'a FoodItem>,
    pub top_calorie_foods: Vec<&'a FoodItem>,
    pub macro_composition: MacroComposition,
}

impl<'a> AnalyticsSummary<'a> {
    /// Compute every aggregate over a snapshot.
    ///
    /// Returns `None` for an empty snapshot, where averages are undefined.
    pub fn compute(foods: &[&'a FoodItem]) -> Option<Self> {
        if foods.is_empty() {
            return None;
        }

        Some(Self {
            food_count: foods.len(),
            average_protein_per_dollar: average(foods, FoodItem::protein_per_dollar)?,
            average_calories_per_dollar: average(foods, FoodItem::calories_per_dollar)?,
            average_price: average(foods, |f| f.price)?,
            best_protein_value: best_by(foods, FoodItem::protein_per_dollar),
            best_calorie_value: best_by(foods, FoodItem::calories_per_dollar),
            best_nutrient_density: best_by(foods, nutrient_density),
            top_protein_foods: top_n_by(foods, FoodItem::protein_per_dollar, TOP_N),
            top_calorie_foods: top_n_by(foods, FoodItem::calories_per_dollar, TOP_N),
            macro_composition: macro_composition(foods),
        })
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `(protein + fiber) / max(calories, 1)`.
#[inline]
pub fn nutrient_density(food: &FoodItem) -> f64 {
    (food.protein + food.fiber_or_zero()) / food.calories.max(1.0)
}

/// Mean of `metric` over the collection, `None` when it is empty.
pub fn average<F>(foods: &[&FoodItem], metric: F) -> Option<f64>
where
    F: Fn(&FoodItem) -> f64,
{
    if foods.is_empty() {
        return None;
    }
    let total: f64 = foods.iter().map(|f| metric(f)).sum();
    Some(total / foods.len() as f64)
}

/// The food with the strictly largest positive `metric`.
///
/// Starts from the empty sentinel, so ties keep the earlier food and a
/// collection with no positive value yields the sentinel.
pub fn best_by<F>(foods: &[&FoodItem], metric: F) -> Best
where
    F: Fn(&FoodItem) -> f64,
{
    foods.iter().fold(Best::default(), |best, food| {
        let value = metric(food);
        if value > best.value {
            Best {
                name: food.name.clone(),
                value,
            }
        } else {
            best
        }
    })
}

/// Ordering for a descending ranking. NaN ranks below every number.
pub(crate) fn cmp_descending(a: f64, b: f64) -> Ordering {
    let rank = |v: f64| if v.is_nan() { f64::NEG_INFINITY } else { v };
    rank(b).partial_cmp(&rank(a)).unwrap_or(Ordering::Equal)
}

/// First `n` foods by descending `metric`; equal values keep input order.
pub fn top_n_by<'a, F>(foods: &[&'a FoodItem], metric: F, n: usize) -> Vec<&'a FoodItem>
where
    F: Fn(&FoodItem) -> f64,
{
    let mut ranked: Vec<&FoodItem> = foods.to_vec();
    ranked.sort_by(|a, b| cmp_descending(metric(a), metric(b)));
    ranked.truncate(n);
    ranked
}

/// Percentage of protein, carbs, fats, and fiber in their combined total.
///
/// Sugar and serving mass are not part of the denominator. An all-zero
/// collection yields all zeros.
pub fn macro_composition(foods: &[&FoodItem]) -> MacroComposition {
    let totals = foods
        .iter()
        .fold(MacroComposition::default(), |mut acc, food| {
            acc.protein += food.protein;
            acc.carbs += food.carbohydrates;
            acc.fats += food.fats;
            acc.fiber += food.fiber_or_zero();
            acc
        });

    let grand_total = totals.sum();
    if grand_total <= 0.0 {
        return MacroComposition::default();
    }

    let pct = |part: f64| round_to(100.0 * part / grand_total, 1);
    MacroComposition {
        protein: pct(totals.protein),
        carbs: pct(totals.carbs),
        fats: pct(totals.fats),
        fiber: pct(totals.fiber),
    }
}
