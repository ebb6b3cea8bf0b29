use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::info;

use diet_planner_rs::cli::{Cli, Command};
use diet_planner_rs::config::{Config, resolve_data_dir};
use diet_planner_rs::error::{DietError, Result};
use diet_planner_rs::interface::{collect_profile, display_plan, export_plan_csv, prompt_yes_no};
use diet_planner_rs::llm::GeminiClient;
use diet_planner_rs::models::{UserProfile, Weekday};
use diet_planner_rs::planner::DietPlanner;
use diet_planner_rs::state::{DirStorage, PlanStore, SavedState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    info!(data_dir = %data_dir.display(), "Using plan storage");
    let store = PlanStore::new(DirStorage::new(&data_dir));

    match cli.command.unwrap_or_default() {
        Command::Generate { profile } => cmd_generate(store, profile.as_deref()).await,
        Command::Show { day } => cmd_show(store, day.as_deref()),
        Command::Status => cmd_status(&store),
        Command::Reset => cmd_reset(store),
        Command::Export { csv } => cmd_export(store, &csv),
    }
}

fn load_profile(path: &Path) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    if !profile.is_valid() {
        return Err(DietError::InvalidInput(format!(
            "profile in {} needs a positive age, weight and height plus a region and currency",
            path.display()
        )));
    }
    Ok(profile)
}

/// Collect a profile and generate a fresh plan.
async fn cmd_generate(store: PlanStore<DirStorage>, profile_path: Option<&Path>) -> Result<()> {
    // Fails before any prompt or request when the key is missing.
    let config = Config::from_env()?;

    if profile_path.is_none() && store.exists() {
        let replace = prompt_yes_no("A saved plan exists and will be replaced. Continue?", true)?;
        if !replace {
            println!("Keeping the saved plan. Use 'show' to view it.");
            return Ok(());
        }
    }

    let profile = match profile_path {
        Some(path) => load_profile(path)?,
        None => collect_profile()?,
    };

    let mut planner = DietPlanner::new(GeminiClient::from_config(&config), store);

    println!();
    println!("Generating your weekly plan with {}...", config.model);
    let generated = planner.generate(&profile).await?;

    display_plan(&generated.plan, &generated.summary, None);

    if generated.saved {
        println!("Plan saved. Run 'show' to view it again.");
    } else {
        println!("Plan could not be saved; it is only shown this time.");
    }

    Ok(())
}

/// Show the saved plan.
fn cmd_show(mut store: PlanStore<DirStorage>, day: Option<&str>) -> Result<()> {
    let only = match day {
        Some(input) => Some(Weekday::from_fuzzy(input).ok_or_else(|| {
            DietError::InvalidInput(format!("'{}' is not a day of the week", input))
        })?),
        None => None,
    };

    match store.load_saved() {
        SavedState::Loaded(saved) => display_plan(&saved.plan, &saved.summary, only),
        SavedState::Empty => println!("No saved plan. Run 'generate' to create one."),
        SavedState::Corrupted => return Err(DietError::CorruptedPlan),
    }

    Ok(())
}

fn cmd_status(store: &PlanStore<DirStorage>) -> Result<()> {
    if store.exists() {
        println!("A saved plan is available in {}", store.storage().dir().display());
    } else {
        println!("No saved plan.");
    }
    Ok(())
}

/// Delete the saved plan.
fn cmd_reset(mut store: PlanStore<DirStorage>) -> Result<()> {
    store.clear();
    println!("Saved plan cleared.");
    Ok(())
}

/// Export the saved plan's meals to CSV.
fn cmd_export(mut store: PlanStore<DirStorage>, path: &Path) -> Result<()> {
    let saved = store.load_saved().into_plan()?;
    export_plan_csv(&saved.plan, path)?;
    println!(
        "Exported {} meals to {}",
        saved.plan.meal_count(),
        path.display()
    );
    Ok(())
}
