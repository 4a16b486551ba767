use assert_float_eq::*;
use chrono::{Duration, TimeZone, Utc};

use nutrition_tracker_rs::metrics::{
    AnalyticsSummary, FoodGroup, HealthSortKey, ProcessingLevel, SortDirection, TOP_N, TimeRange,
    efficiency_points, macro_composition, sorted_health_indicators, top_n_by,
};
use nutrition_tracker_rs::models::{FoodId, FoodItem, MealType};
use nutrition_tracker_rs::state::MealPlanner;

#[allow(clippy::too_many_arguments)]
fn make_food(
    id: i64,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    fiber: Option<f64>,
    sugar: Option<f64>,
    price: f64,
) -> FoodItem {
    FoodItem {
        id: FoodId(id),
        name: name.to_string(),
        brand: None,
        serving_size: 100.0,
        calories,
        protein,
        carbohydrates: carbs,
        fats,
        fiber,
        sugar,
        price,
        store: None,
        created_at: None,
    }
}

fn pantry() -> Vec<FoodItem> {
    vec![
        make_food(1, "Rolled oats", 389.0, 16.9, 66.3, 6.9, Some(10.6), Some(1.0), 0.40),
        make_food(2, "Chicken breast", 165.0, 31.0, 0.0, 3.6, None, None, 2.10),
        make_food(3, "Banana", 89.0, 1.1, 22.8, 0.3, Some(2.6), Some(12.2), 0.25),
        make_food(4, "Lentils", 116.0, 9.0, 20.1, 0.4, Some(7.9), Some(1.8), 0.30),
        make_food(5, "Almonds", 579.0, 21.2, 21.6, 49.9, Some(12.5), Some(4.4), 1.60),
        make_food(6, "Fresh spinach", 23.0, 2.9, 3.6, 0.4, Some(2.2), Some(0.4), 0.90),
        make_food(7, "Brown rice", 111.0, 2.6, 23.0, 0.9, Some(1.8), Some(0.4), 0.20),
    ]
}

#[test]
fn test_macro_composition_sums_to_hundred() {
    let foods = pantry();
    for len in 1..=foods.len() {
        let refs: Vec<&FoodItem> = foods[..len].iter().collect();
        let composition = macro_composition(&refs);
        assert_float_absolute_eq!(composition.sum(), 100.0, 0.1 + 1e-9);
    }
}

#[test]
fn test_top_n_is_idempotent() {
    let foods = pantry();
    let refs: Vec<&FoodItem> = foods.iter().collect();

    let once = top_n_by(&refs, FoodItem::protein_per_dollar, TOP_N);
    let twice = top_n_by(&once, FoodItem::protein_per_dollar, TOP_N);

    assert_eq!(once.len(), TOP_N);
    let ids = |v: &[&FoodItem]| v.iter().map(|f| f.id).collect::<Vec<_>>();
    assert_eq!(ids(once.as_slice()), ids(twice.as_slice()));
    assert_eq!(once[0].name, "Rolled oats");
}

#[test]
fn test_summary_over_pantry() {
    let foods = pantry();
    let refs: Vec<&FoodItem> = foods.iter().collect();
    let summary = AnalyticsSummary::compute(&refs).unwrap();

    assert_eq!(summary.food_count, 7);
    assert_eq!(summary.best_calorie_value.name, "Rolled oats");
    assert_float_absolute_eq!(summary.best_calorie_value.value, 972.5, 1e-9);
    assert_float_absolute_eq!(summary.average_price, 5.75 / 7.0, 1e-12);
    assert_eq!(summary.best_nutrient_density.name, "Fresh spinach");
    assert_eq!(summary.top_calorie_foods.len(), TOP_N);
}

#[test]
fn test_zero_price_food_is_best_value() {
    let mut foods = pantry();
    foods.push(make_food(8, "Garden kale", 49.0, 4.3, 8.8, 0.9, Some(3.6), Some(2.3), 0.0));
    foods.push(make_food(9, "Tap water", 0.0, 0.0, 0.0, 0.0, None, None, 0.0));
    let refs: Vec<&FoodItem> = foods.iter().collect();

    let summary = AnalyticsSummary::compute(&refs).unwrap();
    assert_eq!(summary.best_calorie_value.name, "Garden kale");
    assert!(summary.best_calorie_value.value.is_infinite());
    assert!(summary.average_calories_per_dollar.is_nan());

    let top = top_n_by(&refs, FoodItem::calories_per_dollar, foods.len());
    assert_eq!(top.first().map(|f| f.id), Some(FoodId(8)));
    assert_eq!(top.last().map(|f| f.id), Some(FoodId(9)));
}

#[test]
fn test_time_range_recomputes_on_recent_foods() {
    let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
    let mut foods = pantry();
    foods[0].created_at = Some(now - Duration::days(2));
    foods[1].created_at = Some(now - Duration::days(20));
    foods[2].created_at = Some(now - Duration::days(90));

    let week = TimeRange::Week.filter(&foods, now);
    let month = TimeRange::Month.filter(&foods, now);
    let all = TimeRange::All.filter(&foods, now);

    assert_eq!(week.len(), 1);
    assert_eq!(month.len(), 2);
    assert_eq!(all.len(), foods.len());

    let summary = AnalyticsSummary::compute(&week).unwrap();
    assert_eq!(summary.food_count, 1);
    assert_eq!(summary.best_protein_value.name, "Rolled oats");
}

#[test]
fn test_health_table_ordering() {
    let foods = pantry();

    let by_glycemic = sorted_health_indicators(&foods, HealthSortKey::Glycemic, SortDirection::Descending);
    // Banana and brown rice tie at 55 and keep input order.
    assert_eq!(by_glycemic[0].food.name, "Banana");
    assert_eq!(by_glycemic[1].food.name, "Brown rice");
    assert_eq!(by_glycemic.last().map(|r| r.food.name.as_str()), Some("Chicken breast"));

    let by_processing = sorted_health_indicators(&foods, HealthSortKey::Processing, SortDirection::Ascending);
    assert_eq!(by_processing[0].processing, ProcessingLevel::WholeFood);
    assert!(by_processing
        .iter()
        .all(|r| r.processing != ProcessingLevel::UltraProcessed));

    let chicken = by_glycemic.iter().find(|r| r.food.id == FoodId(2)).unwrap();
    assert_eq!(chicken.fiber_sugar_ratio, None);
}

#[test]
fn test_chart_group_filter() {
    let foods = pantry();

    let all = efficiency_points(&foods, &FoodGroup::ALL);
    assert_eq!(all.len(), foods.len());

    let picked = efficiency_points(&foods, &[FoodGroup::Fruits, FoodGroup::Legumes]);
    let names: Vec<&str> = picked.iter().map(|p| p.food.name.as_str()).collect();
    assert_eq!(names, vec!["Banana", "Lentils"]);
}

#[test]
fn test_meal_plan_totals_scenario() {
    let foods = vec![
        make_food(1, "A", 200.0, 10.0, 20.0, 5.0, None, None, 1.0),
        make_food(2, "B", 150.0, 10.0, 20.0, 5.0, None, None, 1.0),
        make_food(3, "C", 50.0, 10.0, 20.0, 5.0, None, None, 1.0),
    ];

    let mut planner = MealPlanner::default();
    planner.add(&foods[0], MealType::Breakfast, 100.0).unwrap();
    planner.add(&foods[1], MealType::Lunch, 200.0).unwrap();
    planner.add(&foods[2], MealType::Snack, 50.0).unwrap();

    assert_float_absolute_eq!(planner.totals().calories, 525.0, 1e-9);
    assert_eq!(planner.progress()[0].percent, 26);
}
