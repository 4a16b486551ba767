use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the food store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub i64);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalogued food product as returned by the store.
///
/// Nutrient values are per serving size. Fiber and sugar are optional on the
/// wire; sums treat a missing value as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,

    pub name: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default = "default_serving_size")]
    pub serving_size: f64,

    pub calories: f64,

    pub protein: f64,

    pub carbohydrates: f64,

    pub fats: f64,

    #[serde(default)]
    pub fiber: Option<f64>,

    #[serde(default)]
    pub sugar: Option<f64>,

    pub price: f64,

    #[serde(default)]
    pub store: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_serving_size() -> f64 {
    100.0
}

/// RFC 3339, or a naive timestamp read as UTC. Anything else is dropped.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|t| t.and_utc())
            })
    }))
}

impl FoodItem {
    /// Calories per currency unit.
    ///
    /// Divides unconditionally: a zero price yields `+inf` for a positive
    /// numerator and `NaN` for `0 / 0`.
    #[inline]
    pub fn calories_per_dollar(&self) -> f64 {
        self.calories / self.price
    }

    /// Protein grams per currency unit. Same zero-price convention as
    /// [`FoodItem::calories_per_dollar`].
    #[inline]
    pub fn protein_per_dollar(&self) -> f64 {
        self.protein / self.price
    }

    /// Fiber grams, absent treated as zero.
    #[inline]
    pub fn fiber_or_zero(&self) -> f64 {
        self.fiber.unwrap_or(0.0)
    }

    /// Sugar grams, absent treated as zero.
    #[inline]
    pub fn sugar_or_zero(&self) -> f64 {
        self.sugar.unwrap_or(0.0)
    }

    /// Label used by pickers: `"Name (Brand)"` unless the brand is empty or generic.
    pub fn display_label(&self) -> String {
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() && brand != "Generic" => {
                format!("{} ({})", self.name, brand)
            }
            _ => self.name.clone(),
        }
    }

    /// Plausibility problems with the nutrient data.
    ///
    /// Values are per 100 g servings; an empty list means nothing looks off.
    pub fn plausibility_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(0.0..=900.0).contains(&self.calories) {
            issues.push(format!("Unusual calories: {:.1}", self.calories));
        }
        if !(0.0..=100.0).contains(&self.protein) {
            issues.push(format!("Unusual protein: {:.1}g", self.protein));
        }
        if !(0.0..=100.0).contains(&self.carbohydrates) {
            issues.push(format!("Unusual carbs: {:.1}g", self.carbohydrates));
        }
        if !(0.0..=100.0).contains(&self.fats) {
            issues.push(format!("Unusual fats: {:.1}g", self.fats));
        }
        if !(0.0..=50.0).contains(&self.fiber_or_zero()) {
            issues.push(format!("Unusual fiber: {:.1}g", self.fiber_or_zero()));
        }

        let macro_sum = self.protein + self.carbohydrates + self.fats;
        if macro_sum > 100.0 {
            issues.push(format!("High macro sum: {:.1}g", macro_sum));
        }

        // Atwater factors: 4 kcal/g protein and carbs, 9 kcal/g fat.
        let calculated = self.protein * 4.0 + self.carbohydrates * 4.0 + self.fats * 9.0;
        if (calculated - self.calories).abs() > 20.0 {
            issues.push(format!(
                "Calorie mismatch: reported={:.1}, calculated={:.1}",
                self.calories, calculated
            ));
        }

        issues
    }

    /// Editable fields of this record, for full-record replacement.
    pub fn to_draft(&self) -> FoodDraft {
        FoodDraft {
            name: self.name.clone(),
            brand: self.brand.clone(),
            serving_size: self.serving_size,
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
            fats: self.fats,
            fiber: self.fiber,
            sugar: self.sugar,
            price: self.price,
            store: self.store.clone(),
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "#{} {}: {} cal, P:{} C:{} F:{} Fi:{} S:{}, ${:.2}",
            self.id,
            self.name,
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fats,
            self.fiber_or_zero(),
            self.sugar_or_zero(),
            self.price
        )
    }
}

/// A FoodItem-shaped payload for `POST /food-items` and `PUT /food-items/{id}`.
///
/// Also the row format for CSV import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub brand: Option<String>,

    #[serde(default = "default_serving_size")]
    pub serving_size: f64,

    pub calories: f64,

    pub protein: f64,

    pub carbohydrates: f64,

    pub fats: f64,

    #[serde(default)]
    pub fiber: Option<f64>,

    #[serde(default)]
    pub sugar: Option<f64>,

    pub price: f64,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub store: Option<String>,
}

impl Default for FoodDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: None,
            serving_size: default_serving_size(),
            calories: 0.0,
            protein: 0.0,
            carbohydrates: 0.0,
            fats: 0.0,
            fiber: None,
            sugar: None,
            price: 0.0,
            store: None,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
