use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::metrics::BubblePoint;
use crate::models::{FoodDraft, FoodId, FoodItem};

/// One exported food row, with the derived per-dollar columns.
#[derive(Debug, Serialize)]
struct FoodExportRow<'a> {
    id: FoodId,
    name: &'a str,
    brand: Option<&'a str>,
    serving_size: f64,
    calories: f64,
    protein: f64,
    carbohydrates: f64,
    fats: f64,
    fiber: Option<f64>,
    sugar: Option<f64>,
    price: f64,
    store: Option<&'a str>,
    calories_per_dollar: f64,
    protein_per_dollar: f64,
}

impl<'a> From<&'a FoodItem> for FoodExportRow<'a> {
    fn from(food: &'a FoodItem) -> Self {
        Self {
            id: food.id,
            name: &food.name,
            brand: food.brand.as_deref(),
            serving_size: food.serving_size,
            calories: food.calories,
            protein: food.protein,
            carbohydrates: food.carbohydrates,
            fats: food.fats,
            fiber: food.fiber,
            sugar: food.sugar,
            price: food.price,
            store: food.store.as_deref(),
            calories_per_dollar: food.calories_per_dollar(),
            protein_per_dollar: food.protein_per_dollar(),
        }
    }
}

/// Write foods to a CSV file.
pub fn export_foods<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for food in foods {
        wtr.serialize(FoodExportRow::from(food))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read food drafts from a CSV file with a header row.
///
/// Columns are the draft fields; unknown columns (such as the derived ones
/// written by [`export_foods`]) are ignored.
pub fn load_food_drafts<P: AsRef<Path>>(path: P) -> Result<Vec<FoodDraft>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut drafts = Vec::new();
    for record in rdr.deserialize() {
        drafts.push(record?);
    }
    Ok(drafts)
}

/// Write chart points to a CSV file.
pub fn write_chart_csv<P: AsRef<Path>>(path: P, points: &[BubblePoint<'_>]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "group", "calories", "price", "radius", "protein", "carbohydrates", "fats", "color"])?;

    for point in points {
        wtr.write_record([
            point.food.name.clone(),
            point.group.label().to_string(),
            format!("{:.1}", point.x),
            format!("{:.2}", point.y),
            format!("{:.2}", point.r),
            format!("{:.1}", point.food.protein),
            format!("{:.1}", point.food.carbohydrates),
            format!("{:.1}", point.food.fats),
            point.group.color().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
