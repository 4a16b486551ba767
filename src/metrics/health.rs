use std::cmp::Ordering;
use std::fmt;

use crate::metrics::constants::*;
use crate::models::FoodItem;

/// Estimated degree of industrial processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingLevel {
    WholeFood,
    MinimallyProcessed,
    ModeratelyProcessed,
    HighlyProcessed,
    /// Defined for the scale but produced by no keyword rule.
    UltraProcessed,
}

impl ProcessingLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingLevel::WholeFood => "Whole Food",
            ProcessingLevel::MinimallyProcessed => "Minimally Processed",
            ProcessingLevel::ModeratelyProcessed => "Moderately Processed",
            ProcessingLevel::HighlyProcessed => "Highly Processed",
            ProcessingLevel::UltraProcessed => "Ultra-Processed",
        }
    }

    /// Ordinal used for sorting: 1 (whole) to 5 (ultra).
    pub fn score(&self) -> u8 {
        match self {
            ProcessingLevel::WholeFood => 1,
            ProcessingLevel::MinimallyProcessed => 2,
            ProcessingLevel::ModeratelyProcessed => 3,
            ProcessingLevel::HighlyProcessed => 4,
            ProcessingLevel::UltraProcessed => 5,
        }
    }
}

impl fmt::Display for ProcessingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword rules for [`estimate_processing_level`], first match wins.
const PROCESSING_RULES: &[(&[&str], ProcessingLevel)] = &[
    (WHOLE_FOOD_KEYWORDS, ProcessingLevel::WholeFood),
    (MINIMALLY_PROCESSED_KEYWORDS, ProcessingLevel::MinimallyProcessed),
    (MODERATELY_PROCESSED_KEYWORDS, ProcessingLevel::ModeratelyProcessed),
    (HIGHLY_PROCESSED_KEYWORDS, ProcessingLevel::HighlyProcessed),
];

/// Classify by keywords in the lowercased name.
pub fn estimate_processing_level(food: &FoodItem) -> ProcessingLevel {
    let name = food.name.to_lowercase();
    PROCESSING_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, level)| *level)
        .unwrap_or(ProcessingLevel::ModeratelyProcessed)
}

/// Macro-based glycemic fallback rules, evaluated in order.
type GlycemicRule = (fn(&FoodItem) -> bool, fn(&FoodItem) -> f64);

const GLYCEMIC_FALLBACK_RULES: &[GlycemicRule] = &[
    // High protein or fat foods sit low on the index.
    (|f| f.protein > 20.0 || f.fats > 20.0, |_| 15.0),
    (|f| f.fiber_or_zero() > 5.0, |f| (60.0 - f.fiber_or_zero()).min(40.0)),
    (|f| f.sugar_or_zero() > 10.0, |f| (50.0 + f.sugar_or_zero() * 0.5).min(70.0)),
];

/// Default when neither the table nor a fallback rule applies.
const GLYCEMIC_DEFAULT: f64 = 50.0;

/// Midpoint of the first table range whose name occurs in `name`.
pub fn lookup_glycemic_range(name: &str) -> Option<f64> {
    let name = name.to_lowercase();
    GLYCEMIC_RANGES
        .iter()
        .find(|(key, _, _)| name.contains(&key.to_lowercase()))
        .map(|(_, min, max)| (min + max) / 2.0)
}

/// Estimated glycemic index: table lookup, then macro heuristics.
pub fn estimate_glycemic_index(food: &FoodItem) -> f64 {
    if let Some(midpoint) = lookup_glycemic_range(&food.name) {
        return midpoint;
    }

    GLYCEMIC_FALLBACK_RULES
        .iter()
        .find(|(applies, _)| applies(food))
        .map(|(_, value)| value(food))
        .unwrap_or(GLYCEMIC_DEFAULT)
}

/// Qualitative band of a glycemic estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlycemicBand {
    Low,
    Medium,
    High,
}

impl GlycemicBand {
    pub fn of(index: f64) -> Self {
        if index <= GLYCEMIC_LOW_MAX {
            GlycemicBand::Low
        } else if index <= GLYCEMIC_MEDIUM_MAX {
            GlycemicBand::Medium
        } else {
            GlycemicBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GlycemicBand::Low => "Low",
            GlycemicBand::Medium => "Medium",
            GlycemicBand::High => "High",
        }
    }
}

/// Fiber per gram of sugar, `None` when it does not apply.
///
/// Applies only when both values are present and sugar is non-zero.
pub fn fiber_sugar_ratio(food: &FoodItem) -> Option<f64> {
    match (food.fiber, food.sugar) {
        (Some(fiber), Some(sugar)) if sugar != 0.0 => Some(fiber / sugar),
        _ => None,
    }
}

/// Qualitative band of a fiber/sugar ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiberSugarBand {
    Good,
    Fair,
    Poor,
    NotApplicable,
}

impl FiberSugarBand {
    pub fn of(ratio: Option<f64>) -> Self {
        match ratio {
            None => FiberSugarBand::NotApplicable,
            Some(r) if r >= FIBER_SUGAR_GOOD => FiberSugarBand::Good,
            Some(r) if r >= FIBER_SUGAR_FAIR => FiberSugarBand::Fair,
            Some(_) => FiberSugarBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FiberSugarBand::Good => "Good",
            FiberSugarBand::Fair => "Fair",
            FiberSugarBand::Poor => "Poor",
            FiberSugarBand::NotApplicable => "N/A",
        }
    }
}

/// The three indicators for one food.
#[derive(Debug, Clone)]
pub struct HealthIndicators<'a> {
    pub food: &'a FoodItem,
    pub glycemic_index: f64,
    pub fiber_sugar_ratio: Option<f64>,
    pub processing: ProcessingLevel,
}

impl<'a> HealthIndicators<'a> {
    pub fn of(food: &'a FoodItem) -> Self {
        Self {
            food,
            glycemic_index: estimate_glycemic_index(food),
            fiber_sugar_ratio: fiber_sugar_ratio(food),
            processing: estimate_processing_level(food),
        }
    }

    pub fn glycemic_band(&self) -> GlycemicBand {
        GlycemicBand::of(self.glycemic_index)
    }

    pub fn fiber_sugar_band(&self) -> FiberSugarBand {
        FiberSugarBand::of(self.fiber_sugar_ratio)
    }

    /// Fiber/sugar value used only for ordering; not-applicable counts as 0.
    pub fn fiber_sugar_sort_value(&self) -> f64 {
        self.fiber_sugar_ratio.unwrap_or(0.0)
    }
}

/// Column the health table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthSortKey {
    #[default]
    Name,
    Glycemic,
    FiberSugar,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Indicators for every food, ordered by `key`; ties keep input order.
pub fn sorted_health_indicators(
    foods: &[FoodItem],
    key: HealthSortKey,
    direction: SortDirection,
) -> Vec<HealthIndicators<'_>> {
    let mut rows: Vec<HealthIndicators> = foods.iter().map(HealthIndicators::of).collect();

    rows.sort_by(|a, b| {
        let ordering = match key {
            HealthSortKey::Name => a.food.name.to_lowercase().cmp(&b.food.name.to_lowercase()),
            HealthSortKey::Glycemic => a.glycemic_index.total_cmp(&b.glycemic_index),
            HealthSortKey::FiberSugar => a
                .fiber_sugar_sort_value()
                .total_cmp(&b.fiber_sugar_sort_value()),
            HealthSortKey::Processing => a.processing.score().cmp(&b.processing.score()),
        };
        direction.apply(ordering)
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodId;

    fn food(name: &str, protein: f64, fats: f64, fiber: Option<f64>, sugar: Option<f64>) -> FoodItem {
        FoodItem {
            id: FoodId(1),
            name: name.to_string(),
            brand: None,
            serving_size: 100.0,
            calories: 100.0,
            protein,
            carbohydrates: 10.0,
            fats,
            fiber,
            sugar,
            price: 1.0,
            store: None,
            created_at: None,
        }
    }

    #[test]
    fn test_glycemic_table_midpoint() {
        assert_eq!(estimate_glycemic_index(&food("Whole grain bread", 5.0, 1.0, None, None)), 80.0);
        assert_eq!(estimate_glycemic_index(&food("GRILLED CHICKEN", 30.0, 5.0, None, None)), 0.0);
    }

    #[test]
    fn test_glycemic_table_order_first_match() {
        // Brown rice precedes Corn in the table.
        assert_eq!(lookup_glycemic_range("brown rice with corn"), Some(55.0));
    }

    #[test]
    fn test_glycemic_protein_branch_wins() {
        let f = food("Mystery bar", 25.0, 1.0, Some(10.0), Some(20.0));
        assert_eq!(estimate_glycemic_index(&f), 15.0);
    }

    #[test]
    fn test_glycemic_fat_branch() {
        let f = food("Mystery spread", 2.0, 30.0, None, Some(40.0));
        assert_eq!(estimate_glycemic_index(&f), 15.0);
    }

    #[test]
    fn test_glycemic_fiber_branch() {
        assert_eq!(estimate_glycemic_index(&food("Bran mix", 5.0, 1.0, Some(10.0), Some(20.0))), 40.0);
        assert_eq!(estimate_glycemic_index(&food("Psyllium", 5.0, 1.0, Some(25.0), None)), 35.0);
    }

    #[test]
    fn test_glycemic_sugar_branch() {
        assert_eq!(estimate_glycemic_index(&food("Candy", 0.0, 0.0, None, Some(16.0))), 58.0);
        assert_eq!(estimate_glycemic_index(&food("Syrup", 0.0, 0.0, None, Some(60.0))), 70.0);
    }

    #[test]
    fn test_glycemic_default() {
        assert_eq!(estimate_glycemic_index(&food("Mystery", 5.0, 5.0, Some(1.0), Some(2.0))), 50.0);
    }

    #[test]
    fn test_glycemic_band() {
        assert_eq!(GlycemicBand::of(55.0), GlycemicBand::Low);
        assert_eq!(GlycemicBand::of(70.0), GlycemicBand::Medium);
        assert_eq!(GlycemicBand::of(70.5), GlycemicBand::High);
    }

    #[test]
    fn test_fiber_sugar_ratio() {
        assert_eq!(fiber_sugar_ratio(&food("A", 0.0, 0.0, Some(3.0), Some(1.5))), Some(2.0));
        assert_eq!(fiber_sugar_ratio(&food("B", 0.0, 0.0, Some(0.0), Some(4.0))), Some(0.0));
        assert_eq!(fiber_sugar_ratio(&food("C", 0.0, 0.0, Some(3.0), Some(0.0))), None);
        assert_eq!(fiber_sugar_ratio(&food("D", 0.0, 0.0, None, Some(3.0))), None);
        assert_eq!(fiber_sugar_ratio(&food("E", 0.0, 0.0, Some(3.0), None)), None);
    }

    #[test]
    fn test_zero_sugar_sorts_as_zero_but_stays_not_applicable() {
        let foods = vec![
            food("High", 0.0, 0.0, Some(4.0), Some(2.0)),
            food("NoSugar", 0.0, 0.0, Some(3.0), Some(0.0)),
            food("Low", 0.0, 0.0, Some(1.0), Some(4.0)),
        ];

        let rows = sorted_health_indicators(&foods, HealthSortKey::FiberSugar, SortDirection::Ascending);
        let names: Vec<&str> = rows.iter().map(|r| r.food.name.as_str()).collect();
        assert_eq!(names, vec!["NoSugar", "Low", "High"]);

        let no_sugar = &rows[0];
        assert_eq!(no_sugar.fiber_sugar_ratio, None);
        assert_eq!(no_sugar.fiber_sugar_sort_value(), 0.0);
        assert_eq!(no_sugar.fiber_sugar_band(), FiberSugarBand::NotApplicable);
    }

    #[test]
    fn test_fiber_sugar_band() {
        assert_eq!(FiberSugarBand::of(Some(1.0)), FiberSugarBand::Good);
        assert_eq!(FiberSugarBand::of(Some(0.5)), FiberSugarBand::Fair);
        assert_eq!(FiberSugarBand::of(Some(0.1)), FiberSugarBand::Poor);
        assert_eq!(FiberSugarBand::of(None), FiberSugarBand::NotApplicable);
    }

    #[test]
    fn test_processing_keyword_priority() {
        let salmon = food("Frozen Raw Salmon", 20.0, 13.0, None, None);
        assert_eq!(estimate_processing_level(&salmon), ProcessingLevel::WholeFood);

        let beans = food("Canned baked beans", 5.0, 1.0, None, None);
        assert_eq!(estimate_processing_level(&beans), ProcessingLevel::MinimallyProcessed);

        let flour = food("Refined flour", 10.0, 1.0, None, None);
        assert_eq!(estimate_processing_level(&flour), ProcessingLevel::HighlyProcessed);

        let plain = food("Cheddar", 25.0, 33.0, None, None);
        assert_eq!(estimate_processing_level(&plain), ProcessingLevel::ModeratelyProcessed);
    }

    #[test]
    fn test_ultra_processed_is_never_produced() {
        let names = [
            "Ultra-processed snack",
            "Highly processed cheese",
            "Instant noodles",
            "Refined cooked frozen raw thing",
            "Soda",
            "",
        ];
        for name in names {
            let level = estimate_processing_level(&food(name, 1.0, 1.0, None, None));
            assert_ne!(level, ProcessingLevel::UltraProcessed, "{}", name);
        }
        assert_eq!(ProcessingLevel::UltraProcessed.score(), 5);
        assert_eq!(ProcessingLevel::UltraProcessed.label(), "Ultra-Processed");
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive_and_stable() {
        let mut first = food("apple", 0.0, 0.0, None, None);
        first.id = FoodId(1);
        let mut second = food("Apple", 0.0, 0.0, None, None);
        second.id = FoodId(2);
        let banana = food("Banana", 0.0, 0.0, None, None);
        let foods = vec![banana, first, second];

        let asc = sorted_health_indicators(&foods, HealthSortKey::Name, SortDirection::Ascending);
        let ids: Vec<i64> = asc.iter().map(|r| r.food.id.0).collect();
        assert_eq!(asc[2].food.name, "Banana");
        assert_eq!(&ids[..2], &[1, 2]);

        let desc = sorted_health_indicators(&foods, HealthSortKey::Name, SortDirection::Descending);
        assert_eq!(desc[0].food.name, "Banana");
        assert_eq!(desc[1].food.id, FoodId(1));
        assert_eq!(desc[2].food.id, FoodId(2));
    }

    #[test]
    fn test_sort_by_processing_descending() {
        let foods = vec![
            food("Fresh kale", 3.0, 1.0, None, None),
            food("Processed ham", 15.0, 5.0, None, None),
            food("Dried figs", 3.0, 1.0, None, None),
        ];
        let rows = sorted_health_indicators(&foods, HealthSortKey::Processing, SortDirection::Descending);
        let scores: Vec<u8> = rows.iter().map(|r| r.processing.score()).collect();
        assert_eq!(scores, vec![4, 2, 1]);
    }
}
