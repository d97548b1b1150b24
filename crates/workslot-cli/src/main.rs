use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "workslot-cli", version, about = "Workslot CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan tasks into availability blocks
    Plan {
        /// JSON file holding tasks and availability
        #[arg(long)]
        input: PathBuf,
        /// Reference time (RFC3339); defaults to now
        #[arg(long)]
        now: Option<String>,
        /// Config file path override
        #[arg(long)]
        config: Option<PathBuf>,
        /// Generate availability from the configured template instead
        /// of reading it from the input file
        #[arg(long, default_value_t = false)]
        default_availability: bool,
    },
    /// Generate availability blocks from the configured template
    Availability {
        /// Start date (RFC3339); defaults to now
        #[arg(long)]
        start: Option<String>,
        /// Number of days to cover; defaults to the configured horizon
        #[arg(long)]
        days: Option<u32>,
        /// Config file path override
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Capacity statistics for a finished plan
    Stats {
        /// JSON input the plan was produced from
        #[arg(long)]
        input: PathBuf,
        /// JSON schedule result
        #[arg(long)]
        result: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan {
            input,
            now,
            config,
            default_availability,
        } => commands::plan::run(&input, now.as_deref(), config.as_deref(), default_availability),
        Commands::Availability {
            start,
            days,
            config,
        } => commands::availability::run(start.as_deref(), days, config.as_deref()),
        Commands::Stats { input, result } => commands::stats::run(&input, &result),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
