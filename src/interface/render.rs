use crate::metrics::{
    AnalyticsSummary, BubblePoint, FoodGroup, HealthIndicators, TimeRange, nutrient_density,
};
use crate::models::{FoodItem, MealType};
use crate::state::MealPlanner;

/// Format a ratio that may be infinite or undefined after a zero price.
pub fn format_metric(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else {
        format!("{:.*}", decimals, value)
    }
}

fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_metric(v, decimals))
        .unwrap_or_else(|| "N/A".to_string())
}

fn name_width<'a, I>(names: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(|n| n.chars().count()).max().unwrap_or(0).max(min)
}

/// Food list with cost-efficiency columns.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let labels: Vec<String> = foods.iter().map(|f| f.display_label()).collect();
    let width = name_width(labels.iter().map(String::as_str), 4);

    println!(
        "{:>5}  {:<width$}  {:>7}  {:>7}  {:>7}  {:>8}  {:>8}",
        "ID", "Name", "Cal", "Prot", "Price", "Cal/$", "Prot/$",
        width = width
    );
    for (food, label) in foods.iter().zip(&labels) {
        println!(
            "{:>5}  {:<width$}  {:>7.1}  {:>7.1}  {:>7.2}  {:>8}  {:>8}",
            food.id,
            label,
            food.calories,
            food.protein,
            food.price,
            format_metric(food.calories_per_dollar(), 1),
            format_metric(food.protein_per_dollar(), 2),
            width = width
        );
    }

    println!();
}

/// Every field of one food, plus its health indicators.
pub fn display_food_detail(food: &FoodItem) {
    let health = HealthIndicators::of(food);

    println!();
    println!("=== #{} {} ===", food.id, food.display_label());
    println!();
    println!("Serving size:  {:.0} g", food.serving_size);
    println!("Calories:      {:.1}", food.calories);
    println!("Protein:       {:.1} g", food.protein);
    println!("Carbohydrates: {:.1} g", food.carbohydrates);
    println!("Fats:          {:.1} g", food.fats);
    println!("Fiber:         {}", format_optional(food.fiber, 1));
    println!("Sugar:         {}", format_optional(food.sugar, 1));
    println!("Price:         {:.2}", food.price);
    if let Some(store) = &food.store {
        println!("Store:         {}", store);
    }
    if let Some(created) = food.created_at {
        println!("Added:         {}", created.format("%Y-%m-%d"));
    }

    println!();
    println!("Calories/$:    {}", format_metric(food.calories_per_dollar(), 1));
    println!("Protein/$:     {}", format_metric(food.protein_per_dollar(), 2));
    println!("Density:       {:.3}", nutrient_density(food));
    println!(
        "Glycemic:      {:.0} ({})",
        health.glycemic_index,
        health.glycemic_band().label()
    );
    println!(
        "Fiber/sugar:   {} ({})",
        format_optional(health.fiber_sugar_ratio, 2),
        health.fiber_sugar_band().label()
    );
    println!("Processing:    {}", health.processing);
    println!();
}

/// Analytics view for a time range.
pub fn display_analytics(summary: Option<&AnalyticsSummary<'_>>, range: TimeRange) {
    let range_label = match range {
        TimeRange::All => "all time",
        TimeRange::Month => "last 30 days",
        TimeRange::Week => "last 7 days",
    };

    println!();
    println!("=== Analytics ({}) ===", range_label);
    println!();

    let Some(summary) = summary else {
        println!("No foods in this range.");
        println!();
        return;
    };

    println!("Foods:                  {}", summary.food_count);
    println!(
        "Avg protein per $:      {}",
        format_metric(summary.average_protein_per_dollar, 2)
    );
    println!(
        "Avg calories per $:     {}",
        format_metric(summary.average_calories_per_dollar, 1)
    );
    println!("Avg price:              {:.2}", summary.average_price);
    println!();
    println!(
        "Best protein value:     {} ({})",
        summary.best_protein_value.name,
        format_metric(summary.best_protein_value.value, 2)
    );
    println!(
        "Best calorie value:     {} ({})",
        summary.best_calorie_value.name,
        format_metric(summary.best_calorie_value.value, 1)
    );
    println!(
        "Best nutrient density:  {} ({:.3})",
        summary.best_nutrient_density.name, summary.best_nutrient_density.value
    );

    println!();
    println!("--- Top protein per $ ---");
    for (i, food) in summary.top_protein_foods.iter().enumerate() {
        println!(
            "{:>3}. {} ({})",
            i + 1,
            food.display_label(),
            format_metric(food.protein_per_dollar(), 2)
        );
    }

    println!();
    println!("--- Top calories per $ ---");
    for (i, food) in summary.top_calorie_foods.iter().enumerate() {
        println!(
            "{:>3}. {} ({})",
            i + 1,
            food.display_label(),
            format_metric(food.calories_per_dollar(), 1)
        );
    }

    let macros = &summary.macro_composition;
    println!();
    println!("--- Macro composition ---");
    println!("Protein: {:.1}%", macros.protein);
    println!("Carbs:   {:.1}%", macros.carbs);
    println!("Fats:    {:.1}%", macros.fats);
    println!("Fiber:   {:.1}%", macros.fiber);
    println!();
}

/// Health indicator table; not-applicable ratios show as N/A.
pub fn display_health_table(rows: &[HealthIndicators<'_>]) {
    if rows.is_empty() {
        println!("No foods loaded.");
        return;
    }

    let width = name_width(rows.iter().map(|r| r.food.name.as_str()), 4);

    println!();
    println!(
        "{:<width$}  {:>4}  {:<6}  {:>11}  {:<5}  {}",
        "Name", "GI", "Band", "Fiber/Sugar", "", "Processing",
        width = width
    );
    for row in rows {
        println!(
            "{:<width$}  {:>4.0}  {:<6}  {:>11}  {:<5}  {}",
            row.food.name,
            row.glycemic_index,
            row.glycemic_band().label(),
            format_optional(row.fiber_sugar_ratio, 2),
            row.fiber_sugar_band().label(),
            row.processing,
            width = width
        );
    }
    println!();
}

/// Chart points grouped by food group.
pub fn display_chart(points: &[BubblePoint<'_>], active: &[FoodGroup]) {
    if points.is_empty() {
        println!("No foods in the selected groups.");
        return;
    }

    let width = name_width(points.iter().map(|p| p.food.name.as_str()), 4);

    println!();
    println!("=== Calories vs price ({} points) ===", points.len());

    for group in active {
        let members: Vec<&BubblePoint> = points.iter().filter(|p| p.group == *group).collect();
        if members.is_empty() {
            continue;
        }

        println!();
        println!("--- {} [{}] ---", group, group.color());
        for point in members {
            println!(
                "  {:<width$}  {:>7.1} cal  {:>7.2}  r={:.1}",
                point.food.name,
                point.x,
                point.y,
                point.r,
                width = width
            );
        }
    }
    println!();
}

/// Planned entries per meal slot, then progress toward each daily target.
pub fn display_meal_plan(planner: &MealPlanner) {
    println!();
    if planner.plan_name().trim().is_empty() {
        println!("=== Meal Plan (unnamed) ===");
    } else {
        println!("=== Meal Plan: {} ===", planner.plan_name().trim());
    }

    for meal_type in MealType::ALL {
        let entries = planner.entries_for(meal_type);
        println!();
        println!("{}:", meal_type);
        if entries.is_empty() {
            println!("  (empty)");
            continue;
        }
        for entry in entries {
            println!(
                "  {} - {:.0}g ({:.0} cal)",
                entry.food.display_label(),
                entry.display_quantity,
                entry.contribution(entry.food.calories)
            );
        }
    }

    println!();
    println!("--- Daily targets ---");
    for progress in planner.progress() {
        println!(
            "{:<9} {:>7.1} / {:<6.0}{:<4} {:>3}%",
            progress.nutrient.label(),
            progress.total,
            progress.target,
            progress.nutrient.unit(),
            progress.percent
        );
    }
    println!();
}

/// Plausibility report, one block per flagged food.
pub fn display_verification(foods: &[FoodItem]) {
    let flagged: Vec<(&FoodItem, Vec<String>)> = foods
        .iter()
        .map(|f| (f, f.plausibility_issues()))
        .filter(|(_, issues)| !issues.is_empty())
        .collect();

    println!();
    println!("Checked {} foods, {} flagged.", foods.len(), flagged.len());

    for (food, issues) in flagged {
        println!();
        println!("#{} {}", food.id, food.display_label());
        for issue in issues {
            println!("  - {}", issue);
        }
    }
    println!();
}

/// Print a failure notification to stderr.
pub fn display_notification(title: &str, message: &str) {
    eprintln!("{}: {}", title, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(12.345, 2), "12.35");
        assert_eq!(format_metric(f64::INFINITY, 2), "inf");
        assert_eq!(format_metric(f64::NAN, 1), "N/A");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None, 2), "N/A");
        assert_eq!(format_optional(Some(0.5), 2), "0.50");
    }

    #[test]
    fn test_name_width_has_floor() {
        assert_eq!(name_width(["ab", "abc"], 4), 4);
        assert_eq!(name_width(["Black beans"], 4), 11);
    }
}
