use std::cmp::Ordering;

use crate::metrics::health::SortDirection;
use crate::models::FoodItem;

/// Column the food list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSortField {
    #[default]
    CaloriesPerDollar,
    ProteinPerDollar,
    Price,
    Calories,
    Protein,
    Sugar,
}

impl ListSortField {
    pub fn value(&self, food: &FoodItem) -> f64 {
        match self {
            ListSortField::CaloriesPerDollar => food.calories_per_dollar(),
            ListSortField::ProteinPerDollar => food.protein_per_dollar(),
            ListSortField::Price => food.price,
            ListSortField::Calories => food.calories,
            ListSortField::Protein => food.protein,
            ListSortField::Sugar => food.sugar_or_zero(),
        }
    }
}

/// Order the list view. NaN values go last in either direction; ties keep input order.
pub fn sort_food_list(foods: &[FoodItem], field: ListSortField, direction: SortDirection) -> Vec<&FoodItem> {
    let mut sorted: Vec<&FoodItem> = foods.iter().collect();
    sorted.sort_by(|a, b| {
        let (va, vb) = (field.value(a), field.value(b));
        match (va.is_nan(), vb.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => direction.apply(va.partial_cmp(&vb).unwrap_or(Ordering::Equal)),
        }
    });
    sorted
}
