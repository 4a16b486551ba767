pub mod prompts;
pub mod render;

pub use prompts::{
    PlanAction, match_foods, pick_entry, pick_food, prompt_food_draft, prompt_grams,
    prompt_meal_type, prompt_plan_action, prompt_plan_name, prompt_yes_no,
};
pub use render::{
    display_analytics, display_chart, display_food_detail, display_food_list, display_health_table,
    display_meal_plan, display_notification, display_verification, format_metric,
};
