//! CLI frontend for the Oreforge crafting calculator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use forge_core::CraftType;
use forge_engine::config::{FRACTION_DENOMINATOR_CAP, MIN_INGREDIENTS, TRAIT_THRESHOLD_PERCENT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "forge",
    about = "Oreforge: predict what a handful of ores will forge into",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a data directory with sample ore and odds tables
    Init {
        /// Directory to create
        dir: PathBuf,
    },

    /// Predict the result of forging a set of ores
    Craft {
        /// Ores as NAME=QUANTITY (e.g. "Iron=3" "Lapis Lazuli=2")
        #[arg(required = true)]
        ores: Vec<String>,

        /// Forge armor instead of a weapon
        #[arg(short, long)]
        armor: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Minimum total ore count
        #[arg(long, default_value_t = MIN_INGREDIENTS)]
        min: f64,

        /// Composition percent an ore needs for its traits to transfer
        #[arg(long, default_value_t = TRAIT_THRESHOLD_PERCENT)]
        threshold: f64,

        /// Directory containing the data files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List ores by multiplier
    Ores {
        /// Only show ores whose name contains this text
        filter: Option<String>,

        /// Directory containing the data files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show the outcome odds for an ore count
    Odds {
        /// Total ore count
        count: f64,

        /// Show armor odds instead of weapon odds
        #[arg(short, long)]
        armor: bool,

        /// Directory containing the data files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a decimal drop chance as a simplified fraction
    Fraction {
        /// Chance between 0 and 1
        chance: f64,

        /// Largest denominator to try
        #[arg(long, default_value_t = FRACTION_DENOMINATOR_CAP)]
        cap: u64,
    },

    /// Validate the data files
    Check {
        /// Directory containing the data files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn craft_type(armor: bool) -> CraftType {
    if armor {
        CraftType::Armor
    } else {
        CraftType::Weapon
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Craft {
            ores,
            armor,
            json,
            min,
            threshold,
            dir,
        } => commands::craft::run(&dir, &ores, craft_type(armor), json, min, threshold),
        Commands::Ores { filter, dir } => commands::ores::run(&dir, filter.as_deref()),
        Commands::Odds { count, armor, dir } => commands::odds::run(&dir, count, craft_type(armor)),
        Commands::Fraction { chance, cap } => commands::fraction::run(chance, cap),
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
