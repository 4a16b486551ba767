pub mod chart;
pub mod constants;
pub mod efficiency;
pub mod health;
pub mod listing;

pub use chart::{BubblePoint, FoodGroup, bubble_radius, efficiency_points};
pub use constants::*;
pub use efficiency::{
    AnalyticsSummary, Best, MacroComposition, TimeRange, average, best_by, macro_composition,
    nutrient_density, round_to, top_n_by,
};
pub use health::{
    FiberSugarBand, GlycemicBand, HealthIndicators, HealthSortKey, ProcessingLevel, SortDirection,
    estimate_glycemic_index, estimate_processing_level, fiber_sugar_ratio, lookup_glycemic_range,
    sorted_health_indicators,
};
pub use listing::{ListSortField, sort_food_list};
