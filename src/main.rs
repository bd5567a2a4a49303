use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::str::FromStr;
use strum::VariantArray;
use uuid::Uuid;

use mealweek::config::Config;
use mealweek::error::AppError;
use mealweek::planner::Planner;
use mealweek::storage::{FileStore, KeyValueStore};
use mealweek_mealplan::{Meal, MealSlot};
use mealweek_shopping::render_clipboard_text;

/// mealweek - weekly meal planning from the terminal
#[derive(Parser)]
#[command(name = "mealweek")]
#[command(about = "Plan meals for the current week and build a shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current week plan
    Show,
    /// Assign a meal to a day and slot
    Add {
        #[command(flatten)]
        meal: MealArgs,
    },
    /// Replace the meal in a day and slot
    Update {
        #[command(flatten)]
        meal: MealArgs,
    },
    /// Remove the meal from a day and slot
    Delete {
        /// Day to clear, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// breakfast, lunch or dinner
        #[arg(long)]
        slot: String,
    },
    /// Print the aggregated shopping list for the week
    Shopping {
        /// Emit the clipboard text format instead of the list view
        #[arg(long)]
        export: bool,
    },
    /// Clear the stored plan and start the week fresh
    Reset,
}

#[derive(clap::Args)]
struct MealArgs {
    /// Day to plan, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// breakfast, lunch or dinner
    #[arg(long)]
    slot: String,

    /// Meal name
    #[arg(long)]
    name: String,

    /// Calories; a value that does not parse as a whole number is dropped
    #[arg(long)]
    calories: Option<String>,

    /// Comma-separated ingredient list
    #[arg(long, default_value = "")]
    ingredients: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealweek::observability::init_observability(
        "mealweek",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let store = FileStore::open(&config.storage.dir).map_err(AppError::Storage)?;
    let today = Local::now().date_naive();
    let mut planner = Planner::load(store, today);

    match cli.command {
        Commands::Show => show_command(&planner),
        Commands::Add { meal } => {
            let date = parse_date_arg(meal.date.as_deref(), today)?;
            planner.add_meal(date, build_meal(&meal)?);
            show_command(&planner);
        }
        Commands::Update { meal } => {
            let date = parse_date_arg(meal.date.as_deref(), today)?;
            planner.update_meal(date, build_meal(&meal)?);
            show_command(&planner);
        }
        Commands::Delete { date, slot } => {
            let date = parse_date_arg(date.as_deref(), today)?;
            planner.delete_meal(date, parse_slot(&slot)?);
            show_command(&planner);
        }
        Commands::Shopping { export } => shopping_command(&planner, export),
        Commands::Reset => {
            planner.reset(today);
            tracing::info!("week plan reset");
            show_command(&planner);
        }
    }

    Ok(())
}

fn show_command<S: KeyValueStore>(planner: &Planner<S>) {
    let plan = planner.plan();
    let week_end = plan.week_start_date + Duration::days(6);
    println!(
        "Week of {} - {}",
        plan.week_start_date.format("%B %-d"),
        week_end.format("%B %-d, %Y")
    );

    for day in &plan.days {
        println!("\n{}", day.date.format("%A, %B %-d"));
        for slot in MealSlot::VARIANTS {
            match day.meal(*slot) {
                Some(meal) => {
                    let calories = meal
                        .calories
                        .map(|c| format!(" ({c} kcal)"))
                        .unwrap_or_default();
                    println!("  {:<10} {}{}", slot.as_ref(), meal.name, calories);
                }
                None => println!("  {:<10} -", slot.as_ref()),
            }
        }
    }
}

fn shopping_command<S: KeyValueStore>(planner: &Planner<S>, export: bool) {
    let items = planner.shopping_list();
    if items.is_empty() {
        println!("Add some meals to generate your shopping list");
        return;
    }

    if export {
        println!("{}", render_clipboard_text(&items));
        return;
    }

    println!("Shopping list");
    for item in &items {
        println!("  {:>3}x {}", item.count, item.display_name);
    }
}

fn build_meal(args: &MealArgs) -> Result<Meal, AppError> {
    Ok(Meal {
        id: Uuid::new_v4().to_string(),
        name: args.name.clone(),
        slot: parse_slot(&args.slot)?,
        // lenient on purpose: unparsable calories are stored absent
        calories: args
            .calories
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok()),
        ingredients: split_ingredients(&args.ingredients),
    })
}

fn parse_date_arg(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, AppError> {
    match raw {
        None => Ok(today),
        Some(raw) => {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|source| AppError::InvalidDate {
                input: raw.to_string(),
                source,
            })
        }
    }
}

fn parse_slot(raw: &str) -> Result<MealSlot, AppError> {
    MealSlot::from_str(&raw.to_lowercase()).map_err(|_| AppError::InvalidSlot(raw.to_string()))
}

fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect()
}
