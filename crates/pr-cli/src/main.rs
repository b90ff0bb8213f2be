//! CLI frontend for the Palladium Roller character generator.

mod commands;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "palladium",
    about = "Palladium Roller: mutant animal character generator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log rolls and table lookups to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for a generated sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Chat-style text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a character sheet
    Roll {
        /// Character name shown at the top of the sheet
        #[arg(short, long)]
        name: Option<String>,

        /// Attribute base roll: 3d6 or 4d6 (drop lowest)
        #[arg(short, long, env = "PALLADIUM_STAT_MODE", default_value = "3d6")]
        mode: String,

        /// RNG seed for a reproducible sheet
        #[arg(short, long, env = "PALLADIUM_SEED")]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Show the dice behind each attribute
        #[arg(long)]
        dice: bool,

        /// Append a descriptive art prompt
        #[arg(long)]
        art_prompt: bool,
    },

    /// Print the attribute bonus chart (scores 16-30)
    Chart {
        /// Limit to one attribute (e.g. IQ, PS)
        attribute: Option<String>,
    },

    /// List, roll on, or check the percentile tables
    Tables {
        /// Table name (e.g. categories, urban, backgrounds)
        name: Option<String>,

        /// Resolve this d100 roll against the table
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        roll: Option<u32>,

        /// Verify that every table covers 1-100 exactly once
        #[arg(long)]
        check: bool,
    },

    /// Roll starting finances for a background
    Finances {
        /// Background name (e.g. Trooper, "Feral Mutant Animal")
        background: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            name,
            mode,
            seed,
            format,
            dice,
            art_prompt,
        } => commands::roll::run(commands::roll::RollArgs {
            name,
            mode,
            seed,
            format,
            dice,
            art_prompt,
        }),
        Commands::Chart { attribute } => commands::chart::run(attribute.as_deref()),
        Commands::Tables { name, roll, check } => {
            commands::tables::run(name.as_deref(), roll, check)
        }
        Commands::Finances { background, seed } => commands::finances::run(&background, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
