//! Core error types for workslot-core.
//!
//! This module defines the error hierarchy using thiserror so that
//! validation and configuration failures carry enough context to name
//! the offending record or key.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workslot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors. Inputs are checked before any scheduling work
/// starts; the first offending record aborts the call.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must be greater than start_time ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Task with a zero-minute estimate
    #[error("Task '{task_id}' has an estimated duration of zero minutes")]
    ZeroEstimate { task_id: String },

    /// Priority score outside 0-100
    #[error("Task '{task_id}' has priority_score {value}, expected 0-100")]
    PriorityOutOfRange { task_id: String, value: u8 },

    /// Lead time buffer outside 0-5
    #[error("Task '{task_id}' has lead_time_buffer_days {value}, expected 0-5")]
    LeadTimeOutOfRange { task_id: String, value: u8 },

    /// Task id appears more than once in one request
    #[error("Duplicate task id '{task_id}'")]
    DuplicateTaskId { task_id: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
