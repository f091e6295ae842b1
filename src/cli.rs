use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Diet recommender: builds a day of meals that matches a user's macro targets.
#[derive(Parser, Debug)]
#[command(name = "diet_recommender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a day's meals for a user profile.
    Plan {
        /// Path to the user profile JSON file.
        #[arg(short, long, default_value = "profile.json")]
        profile: PathBuf,

        /// Path to the food catalog (CSV or JSON).
        #[arg(short, long, default_value = "foods.csv")]
        foods: PathBuf,

        /// Optional planner config JSON overriding the built-in constants.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Only show one meal (breakfast, lunch, snack, dinner).
        #[arg(short, long)]
        meal: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the nutrient targets computed for a profile.
    Targets {
        /// Path to the user profile JSON file.
        #[arg(short, long, default_value = "profile.json")]
        profile: PathBuf,
    },

    /// Summarise a food catalog by food group.
    Catalog {
        /// Path to the food catalog (CSV or JSON).
        #[arg(short, long, default_value = "foods.csv")]
        foods: PathBuf,

        /// Write the validated catalog to this JSON file.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Enter a user profile interactively.
    Profile {
        /// Where to write the profile JSON.
        #[arg(short, long, default_value = "profile.json")]
        out: PathBuf,
    },
}
