use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, info};

use nutrition_tracker_rs::api::FoodApiClient;
use nutrition_tracker_rs::cli::{Cli, Command, parse_groups};
use nutrition_tracker_rs::config::ClientConfig;
use nutrition_tracker_rs::error::{Result, TrackerError};
use nutrition_tracker_rs::interface::{
    PlanAction, display_analytics, display_chart, display_food_detail, display_food_list,
    display_health_table, display_meal_plan, display_notification, display_verification,
    pick_entry, pick_food, prompt_food_draft, prompt_grams, prompt_meal_type, prompt_plan_action,
    prompt_plan_name, prompt_yes_no,
};
use nutrition_tracker_rs::logging;
use nutrition_tracker_rs::metrics::{
    AnalyticsSummary, HealthSortKey, ListSortField, SortDirection, TimeRange, efficiency_points,
    sort_food_list, sorted_health_indicators,
};
use nutrition_tracker_rs::models::{FoodDraft, FoodId, FoodItem};
use nutrition_tracker_rs::state::{
    DailyTargets, MealPlanner, SnapshotSlot, export_foods, load_food_drafts, write_chart_csv,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::from_env()?.with_overrides(cli.api_url, cli.timeout);
    config.validate()?;

    let client = FoodApiClient::from_config(&config)?;
    debug!(url = client.base_url(), "using food store");

    match cli.command.unwrap_or_default() {
        Command::List { sort, order } => cmd_list(&client, sort.into(), order.into()).await,
        Command::Show { id } => cmd_show(&client, FoodId(id)).await,
        Command::Add => cmd_add(&client).await,
        Command::Edit { id } => cmd_edit(&client, FoodId(id)).await,
        Command::Delete { id, yes } => cmd_delete(&client, FoodId(id), yes).await,
        Command::Analytics { range } => cmd_analytics(&client, range.into()).await,
        Command::Health { sort, order } => cmd_health(&client, sort.into(), order.into()).await,
        Command::Chart { groups, csv } => cmd_chart(&client, &groups, csv.as_deref()).await,
        Command::Plan => cmd_plan(&client, config.daily_targets).await,
        Command::Verify => cmd_verify(&client).await,
        Command::Export { path } => cmd_export(&client, &path).await,
        Command::Import { path } => cmd_import(&client, &path).await,
    }
}

/// Fetch the food list through a fresh snapshot slot.
async fn load_snapshot(client: &FoodApiClient) -> Result<Arc<[FoodItem]>> {
    let mut slot = SnapshotSlot::new();
    slot.refresh(client).await
}

/// Turn a 404 from the store into a not-found error for `id`.
fn not_found_as(id: FoodId) -> impl FnOnce(TrackerError) -> TrackerError {
    move |e| {
        if e.is_not_found() {
            TrackerError::FoodNotFound(id.to_string())
        } else {
            e
        }
    }
}

fn report_plausibility(food: &FoodItem) {
    let issues = food.plausibility_issues();
    if issues.is_empty() {
        return;
    }
    println!("Warning: the nutrient data looks unusual:");
    for issue in issues {
        println!("  - {}", issue);
    }
}

/// List foods with their cost-efficiency columns.
async fn cmd_list(client: &FoodApiClient, field: ListSortField, direction: SortDirection) -> Result<()> {
    let foods = load_snapshot(client).await?;
    let sorted = sort_food_list(&foods, field, direction);
    display_food_list(&sorted, "Foods");
    Ok(())
}

async fn cmd_show(client: &FoodApiClient, id: FoodId) -> Result<()> {
    let food = client.get_food(id).await.map_err(not_found_as(id))?;
    display_food_detail(&food);
    Ok(())
}

/// Create a food from an interactive form.
async fn cmd_add(client: &FoodApiClient) -> Result<()> {
    let draft = prompt_food_draft(&FoodDraft::default())?;
    let created = client.create_food(&draft).await?;

    info!(id = %created.id, "food created");
    println!("Added #{} {}", created.id, created.display_label());
    report_plausibility(&created);
    Ok(())
}

/// Replace a food with an edited copy of itself.
async fn cmd_edit(client: &FoodApiClient, id: FoodId) -> Result<()> {
    let current = client.get_food(id).await.map_err(not_found_as(id))?;
    debug!("editing {}", current.debug_string());

    let draft = prompt_food_draft(&current.to_draft())?;
    if draft == current.to_draft() {
        println!("No changes.");
        return Ok(());
    }

    let updated = client.update_food(id, &draft).await.map_err(not_found_as(id))?;
    println!("Updated #{} {}", updated.id, updated.display_label());
    report_plausibility(&updated);
    Ok(())
}

async fn cmd_delete(client: &FoodApiClient, id: FoodId, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no(&format!("Delete food #{}?", id), false)? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_food(id).await.map_err(not_found_as(id))?;
    println!("Deleted food #{}.", id);
    Ok(())
}

/// Aggregates over the foods created inside `range`.
async fn cmd_analytics(client: &FoodApiClient, range: TimeRange) -> Result<()> {
    let foods = load_snapshot(client).await?;
    let in_range = range.filter(&foods, Utc::now());
    debug!(total = foods.len(), in_range = in_range.len(), "analytics input");

    let summary = AnalyticsSummary::compute(&in_range);
    display_analytics(summary.as_ref(), range);
    Ok(())
}

async fn cmd_health(client: &FoodApiClient, key: HealthSortKey, direction: SortDirection) -> Result<()> {
    let foods = load_snapshot(client).await?;
    let rows = sorted_health_indicators(&foods, key, direction);
    display_health_table(&rows);
    Ok(())
}

async fn cmd_chart(client: &FoodApiClient, groups: &[String], csv: Option<&Path>) -> Result<()> {
    let active = parse_groups(groups)?;
    let foods = load_snapshot(client).await?;
    let points = efficiency_points(&foods, &active);

    display_chart(&points, &active);

    if let Some(path) = csv {
        write_chart_csv(path, &points)?;
        println!("Wrote {} points to {}", points.len(), path.display());
    }
    Ok(())
}

async fn cmd_verify(client: &FoodApiClient) -> Result<()> {
    let foods = load_snapshot(client).await?;
    display_verification(&foods);
    Ok(())
}

async fn cmd_export(client: &FoodApiClient, path: &Path) -> Result<()> {
    let foods = load_snapshot(client).await?;
    export_foods(path, &foods)?;
    println!("Exported {} foods to {}", foods.len(), path.display());
    Ok(())
}

/// Submit every CSV row; a rejected row is reported and skipped.
async fn cmd_import(client: &FoodApiClient, path: &Path) -> Result<()> {
    let drafts = load_food_drafts(path)?;
    if drafts.is_empty() {
        println!("No rows found in {}", path.display());
        return Ok(());
    }

    let mut created = 0;
    let mut failed = 0;

    for (i, draft) in drafts.iter().enumerate() {
        match client.create_food(draft).await {
            Ok(food) => {
                created += 1;
                debug!(id = %food.id, "imported {}", food.name);
            }
            Err(e) => {
                failed += 1;
                // Row 1 is the header.
                display_notification(&format!("Row {} ({})", i + 2, draft.name), &e.user_message());
            }
        }
    }

    info!(created, failed, "import finished");
    println!("Imported {} foods, {} failed.", created, failed);
    Ok(())
}

async fn refresh_foods(slot: &mut SnapshotSlot, client: &FoodApiClient) {
    match slot.refresh(client).await {
        Ok(foods) => println!("Loaded {} foods", foods.len()),
        Err(e) => display_notification("Could not load foods", &e.user_message()),
    }
}

/// Interactive meal planner against the daily targets.
async fn cmd_plan(client: &FoodApiClient, targets: DailyTargets) -> Result<()> {
    let mut slot = SnapshotSlot::new();
    let mut planner = MealPlanner::new(targets);

    refresh_foods(&mut slot, client).await;

    loop {
        display_meal_plan(&planner);

        match prompt_plan_action()? {
            PlanAction::AddFood => {
                let Some(foods) = slot.current() else {
                    println!("No foods loaded. Try refreshing the food list.");
                    continue;
                };
                let Some(food) = pick_food(&foods)? else {
                    continue;
                };
                let meal_type = prompt_meal_type()?;
                let grams = prompt_grams()?;

                if let Err(e) = planner.add(food, meal_type, grams) {
                    display_notification("Could not add food", &e.user_message());
                }
            }
            PlanAction::RemoveFood => {
                if let Some(entry_id) = pick_entry(&planner)? {
                    planner.remove(entry_id);
                }
            }
            PlanAction::SetName => {
                let name = prompt_plan_name(planner.plan_name())?;
                planner.set_plan_name(name);
            }
            PlanAction::Save => match planner.save(client).await {
                Ok(plan) => println!("Saved meal plan '{}' ({} foods).", plan.name, plan.foods.len()),
                Err(e) => display_notification("Could not save meal plan", &e.user_message()),
            },
            PlanAction::Refresh => refresh_foods(&mut slot, client).await,
            PlanAction::Quit => {
                if !planner.is_empty() && !prompt_yes_no("Discard the unsaved meal plan?", false)? {
                    continue;
                }
                return Ok(());
            }
        }
    }
}
