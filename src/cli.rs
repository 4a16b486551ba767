use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::metrics::{FoodGroup, HealthSortKey, ListSortField, SortDirection, TimeRange};

/// Nutrition tracker: food costs, health indicators, and meal plans against daily targets.
#[derive(Parser, Debug)]
#[command(name = "nutrition_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the food store (overrides NUTRITION_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides NUTRITION_API_TIMEOUT_SECS).
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List foods with cost-efficiency columns.
    List {
        #[arg(long, value_enum, default_value_t = ListSortArg::CaloriesPerDollar)]
        sort: ListSortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,
    },

    /// Show one food with its health indicators.
    Show { id: i64 },

    /// Add a food interactively.
    Add,

    /// Edit a food interactively.
    Edit { id: i64 },

    /// Delete a food.
    Delete {
        id: i64,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },

    /// Cost and nutrition analytics.
    Analytics {
        #[arg(long, value_enum, default_value_t = RangeArg::All)]
        range: RangeArg,
    },

    /// Glycemic, fiber/sugar, and processing indicators.
    Health {
        #[arg(long, value_enum, default_value_t = HealthSortArg::Name)]
        sort: HealthSortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
        order: OrderArg,
    },

    /// Calories-versus-price chart data.
    Chart {
        /// Only include these food groups (repeatable). Defaults to all.
        #[arg(long = "group")]
        groups: Vec<String>,

        /// Also write the points to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Assemble a meal plan interactively.
    Plan,

    /// Flag foods with implausible nutrient data.
    Verify,

    /// Write all foods to a CSV file.
    Export { path: PathBuf },

    /// Submit foods from a CSV file.
    Import { path: PathBuf },
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            sort: ListSortArg::CaloriesPerDollar,
            order: OrderArg::Desc,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSortArg {
    CaloriesPerDollar,
    ProteinPerDollar,
    Price,
    Calories,
    Protein,
    Sugar,
}

impl From<ListSortArg> for ListSortField {
    fn from(arg: ListSortArg) -> Self {
        match arg {
            ListSortArg::CaloriesPerDollar => ListSortField::CaloriesPerDollar,
            ListSortArg::ProteinPerDollar => ListSortField::ProteinPerDollar,
            ListSortArg::Price => ListSortField::Price,
            ListSortArg::Calories => ListSortField::Calories,
            ListSortArg::Protein => ListSortField::Protein,
            ListSortArg::Sugar => ListSortField::Sugar,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortDirection::Ascending,
            OrderArg::Desc => SortDirection::Descending,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeArg {
    All,
    Month,
    Week,
}

impl From<RangeArg> for TimeRange {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::All => TimeRange::All,
            RangeArg::Month => TimeRange::Month,
            RangeArg::Week => TimeRange::Week,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthSortArg {
    Name,
    Glycemic,
    FiberSugar,
    Processing,
}

impl From<HealthSortArg> for HealthSortKey {
    fn from(arg: HealthSortArg) -> Self {
        match arg {
            HealthSortArg::Name => HealthSortKey::Name,
            HealthSortArg::Glycemic => HealthSortKey::Glycemic,
            HealthSortArg::FiberSugar => HealthSortKey::FiberSugar,
            HealthSortArg::Processing => HealthSortKey::Processing,
        }
    }
}

/// Parse `--group` values; empty means every group.
pub fn parse_groups(values: &[String]) -> crate::error::Result<Vec<FoodGroup>> {
    if values.is_empty() {
        return Ok(FoodGroup::ALL.to_vec());
    }
    values.iter().map(|v| v.parse()).collect()
}
