//! TOML-based scheduler configuration.
//!
//! Covers everything a scheduling run can be tuned with:
//! - Session splitting limits (cap and minimum chunk)
//! - Urgency weights
//! - The availability template and planning horizon used when the
//!   caller asks for generated availability
//!
//! Configuration is stored at `~/.config/workslot/config.toml`; every
//! key is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::availability::AvailabilityTemplate;
use crate::error::ConfigError;
use crate::urgency::UrgencyWeights;

/// Scheduler configuration.
///
/// Serialized to/from TOML at `~/.config/workslot/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Longest allowed single session in minutes
    #[serde(default = "default_max_session_minutes")]
    pub max_session_minutes: u32,
    /// Shortest session worth scheduling on its own in minutes
    #[serde(default = "default_min_chunk_minutes")]
    pub min_chunk_minutes: u32,
    /// Days covered when generating availability from the template
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default)]
    pub urgency: UrgencyWeights,
    #[serde(default)]
    pub availability: AvailabilityTemplate,
}

// Default functions
fn default_max_session_minutes() -> u32 {
    120
}
fn default_min_chunk_minutes() -> u32 {
    30
}
fn default_horizon_days() -> u32 {
    14
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_session_minutes: default_max_session_minutes(),
            min_chunk_minutes: default_min_chunk_minutes(),
            horizon_days: default_horizon_days(),
            urgency: UrgencyWeights::default(),
            availability: AvailabilityTemplate::default(),
        }
    }
}

impl SchedulerConfig {
    /// Default config location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("workslot").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when no
    /// config file exists there.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or
    /// validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|err| ConfigError::ParseFailed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write to a specific file, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|err| ConfigError::ParseFailed(err.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        }
        std::fs::write(path, content).map_err(|err| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(())
    }

    /// Check that the limits are usable for splitting and placement.
    ///
    /// # Errors
    /// Returns an error for zero limits and non-finite weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_session_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_session_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.min_chunk_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_chunk_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !self.urgency.priority_weight.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "urgency.priority_weight".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if !self.urgency.deadline_weight.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "urgency.deadline_weight".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        Ok(())
    }
}
