use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use diet_recommender_rs::catalog::{load_catalog, save_catalog};
use diet_recommender_rs::cli::{Cli, Command};
use diet_recommender_rs::error::Result;
use diet_recommender_rs::interface::{
    collect_profile, display_group_counts, display_recommendation, display_user_info,
    prompt_yes_no,
};
use diet_recommender_rs::logging;
use diet_recommender_rs::models::{MealSlot, UserProfile};
use diet_recommender_rs::planner::{DietPlanner, PlannerConfig, load_config, profile_targets};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan {
            profile,
            foods,
            config,
            seed,
            meal,
            json,
        } => cmd_plan(&profile, &foods, config.as_deref(), seed, meal.as_deref(), json),
        Command::Targets { profile } => cmd_targets(&profile),
        Command::Catalog { foods, export } => cmd_catalog(&foods, export.as_deref()),
        Command::Profile { out } => cmd_profile(&out),
    }
}

/// Recommend a day's meals.
fn cmd_plan(
    profile_path: &Path,
    foods_path: &Path,
    config_path: Option<&Path>,
    seed: Option<u64>,
    meal: Option<&str>,
    json: bool,
) -> Result<()> {
    let only: Option<MealSlot> = meal.map(str::parse::<MealSlot>).transpose()?;
    let profile = UserProfile::load(profile_path)?;
    let catalog = load_catalog(foods_path)?;
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    let planner = DietPlanner::new(catalog, config)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(goal = %profile.goal_type, foods = planner.catalog().len(), "planning meals");
    let recommendation = planner.plan(&profile, &mut rng)?;

    if json {
        let output = match only {
            Some(slot) => serde_json::to_string_pretty(&serde_json::json!({
                "mealTime": slot,
                "recommended_diet": recommendation.meal(slot),
            }))?,
            None => serde_json::to_string_pretty(&recommendation)?,
        };
        println!("{}", output);
    } else {
        display_recommendation(&recommendation, only);
    }

    Ok(())
}

/// Show the targets a profile would be planned against.
fn cmd_targets(profile_path: &Path) -> Result<()> {
    let profile = UserProfile::load(profile_path)?;
    let (info, _) = profile_targets(&profile)?;
    display_user_info(&info);
    Ok(())
}

/// Summarise a catalog by group.
fn cmd_catalog(foods_path: &Path, export: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(foods_path)?;
    display_group_counts(&catalog.group_counts(), catalog.len());

    if let Some(path) = export {
        save_catalog(path, &catalog)?;
        println!("Catalog written to {}", path.display());
    }
    Ok(())
}

/// Enter a profile interactively and save it.
fn cmd_profile(out: &Path) -> Result<()> {
    let profile = collect_profile()?;

    if out.exists() {
        let overwrite = prompt_yes_no(&format!("Overwrite {}?", out.display()), false)?;
        if !overwrite {
            println!("Profile not saved.");
            return Ok(());
        }
    }

    profile.save(out)?;
    println!("Profile saved to {}", out.display());
    Ok(())
}
