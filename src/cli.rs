use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// diet-planner — Generate a weekly diet plan from your health profile using Gemini.
#[derive(Parser, Debug)]
#[command(name = "diet-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the saved plan (defaults to DIET_PLAN_DIR or the platform data dir).
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Fill in your profile and generate a new weekly plan.
    Generate {
        /// Read the profile from a JSON file instead of prompting.
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Show the saved plan.
    Show {
        /// Only show one day (e.g. "tue", "Wednesday").
        #[arg(long)]
        day: Option<String>,
    },

    /// Report whether a saved plan exists.
    Status,

    /// Delete the saved plan.
    Reset,

    /// Export the saved plan's meals.
    Export {
        /// Destination CSV file.
        #[arg(long)]
        csv: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate { profile: None }
    }
}
