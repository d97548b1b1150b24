//! CLI command implementations.

pub mod availability;
pub mod config;
pub mod plan;
pub mod stats;

use chrono::{DateTime, Utc};

/// Parse an RFC3339 flag value, defaulting to the current instant.
pub fn parse_reference_time(
    raw: Option<&str>,
) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    Ok(match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc),
        None => Utc::now(),
    })
}
