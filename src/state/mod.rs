mod manager;
mod persistence;
mod snapshot;

pub use manager::{
    DailyTargets, MacroTotals, MealPlanner, TargetProgress, TrackedNutrient, percent_of_target,
};
pub use persistence::{export_foods, load_food_drafts, write_chart_csv};
pub use snapshot::{FetchTicket, SnapshotSlot};
