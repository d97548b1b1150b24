use std::path::{Path, PathBuf};

use clap::Subcommand;
use workslot_core::SchedulerConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Config file path override
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a default configuration file
    Init {
        /// Config file path override
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Loads config from an explicit path, or from the default location
/// (falling back to defaults when no file exists there).
pub fn load_config(path: Option<&Path>) -> Result<SchedulerConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(SchedulerConfig::load_from(p)?),
        None => Ok(SchedulerConfig::load()?),
    }
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { config } => {
            let loaded = load_config(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&loaded)?);
        }
        ConfigAction::Init { config } => {
            let path = match config {
                Some(p) => p,
                None => SchedulerConfig::default_path()
                    .ok_or("no user config directory available")?,
            };
            SchedulerConfig::default().save_to(&path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
