/// Number of foods kept by each top-N ranking.
pub const TOP_N: usize = 5;

/// Daily intake targets (2000 calorie diet).
pub const DAILY_CALORIES: f64 = 2000.0;
pub const DAILY_PROTEIN: f64 = 50.0;
pub const DAILY_CARBS: f64 = 275.0;
pub const DAILY_FATS: f64 = 78.0;

/// Source nutrient values are per this many grams.
pub const GRAMS_PER_SERVING: f64 = 100.0;

/// Gram bounds accepted when adding a food to a meal.
pub const MIN_ENTRY_GRAMS: f64 = 1.0;
pub const MAX_ENTRY_GRAMS: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Health heuristics
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound of the "low" glycemic band.
pub const GLYCEMIC_LOW_MAX: f64 = 55.0;

/// Upper bound of the "medium" glycemic band.
pub const GLYCEMIC_MEDIUM_MAX: f64 = 70.0;

/// Fiber/sugar ratio at or above which the ratio is "good".
pub const FIBER_SUGAR_GOOD: f64 = 1.0;

/// Fiber/sugar ratio at or above which the ratio is "fair".
pub const FIBER_SUGAR_FAIR: f64 = 0.5;

/// Estimated glycemic index ranges, matched in order by case-insensitive substring.
pub const GLYCEMIC_RANGES: &[(&str, f64, f64)] = &[
    // Grains and starches
    ("White rice", 65.0, 75.0),
    ("Brown rice", 50.0, 60.0),
    ("Bread", 70.0, 90.0),
    ("Oatmeal", 45.0, 55.0),
    ("Sweet potato", 50.0, 60.0),
    ("Pasta", 45.0, 65.0),
    ("Quinoa", 50.0, 60.0),
    ("Corn", 55.0, 65.0),
    // Proteins
    ("Chicken", 0.0, 0.0),
    ("Salmon", 0.0, 0.0),
    ("Beef", 0.0, 0.0),
    ("Tofu", 15.0, 20.0),
    ("Pork", 0.0, 0.0),
    ("Tuna", 0.0, 0.0),
    ("Turkey", 0.0, 0.0),
    ("Eggs", 0.0, 0.0),
    // Dairy
    ("Milk", 30.0, 40.0),
    ("Yogurt", 35.0, 45.0),
    ("Cheese", 0.0, 10.0),
    ("Ice cream", 60.0, 80.0),
    // Fruits
    ("Apple", 35.0, 45.0),
    ("Banana", 50.0, 60.0),
    ("Orange", 40.0, 50.0),
    ("Blueberries", 40.0, 50.0),
    ("Strawberries", 25.0, 40.0),
    ("Mango", 50.0, 60.0),
    ("Grapes", 45.0, 60.0),
    ("Pineapple", 55.0, 65.0),
    ("Watermelon", 70.0, 80.0),
    // Vegetables
    ("Broccoli", 15.0, 25.0),
    ("Carrots", 35.0, 45.0),
    ("Spinach", 0.0, 10.0),
    ("Cauliflower", 15.0, 25.0),
    ("Kale", 0.0, 10.0),
    ("Bell pepper", 15.0, 25.0),
    // Legumes
    ("Lentils", 25.0, 35.0),
    ("Black beans", 30.0, 40.0),
    ("Chickpeas", 35.0, 45.0),
    // Nuts and seeds
    ("Almonds", 0.0, 10.0),
    ("Peanut butter", 15.0, 25.0),
    ("Chia seeds", 1.0, 5.0),
    // Other
    ("Honey", 55.0, 65.0),
    ("Maple syrup", 54.0, 65.0),
    ("Dark chocolate", 20.0, 30.0),
    ("Olive oil", 0.0, 0.0),
];

/// Keyword sets for processing-level estimation, in evaluation order.
pub const WHOLE_FOOD_KEYWORDS: &[&str] = &["raw", "fresh", "whole", "natural"];
pub const MINIMALLY_PROCESSED_KEYWORDS: &[&str] = &["frozen", "dried", "canned"];
pub const MODERATELY_PROCESSED_KEYWORDS: &[&str] = &["cooked", "baked"];
pub const HIGHLY_PROCESSED_KEYWORDS: &[&str] = &["processed", "refined"];

// ─────────────────────────────────────────────────────────────────────────────
// Calorie-efficiency chart
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest bubble radius on the efficiency chart.
pub const MIN_BUBBLE_RADIUS: f64 = 8.0;

/// Bubble radius per gram of protein.
pub const BUBBLE_RADIUS_PER_PROTEIN: f64 = 0.7;
