//! Availability blocks and default availability generation.
//!
//! An [`AvailabilityBlock`] is a window of schedulable time; its capacity
//! is the interval length in whole minutes. Blocks are consumed by the
//! scheduler in the order the caller supplies them, so callers wanting
//! earliest-first placement pass them sorted by `start`.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A window of schedulable time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityBlock {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AvailabilityBlock {
    /// Create a new availability block
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Generate the default availability pattern: one 09:00-17:00 UTC block
/// per weekday, starting on `start_date`'s calendar day. Saturdays and
/// Sundays are skipped.
pub fn generate_default_availability(
    start_date: DateTime<Utc>,
    days_ahead: u32,
) -> Vec<AvailabilityBlock> {
    (0..days_ahead)
        .filter_map(|offset| {
            let day = start_date + Duration::days(i64::from(offset));
            match day.weekday() {
                Weekday::Sat | Weekday::Sun => None,
                _ => day_window(day, 9, 0, 17, 0),
            }
        })
        .collect()
}

/// Recurring daily window used to generate availability blocks from
/// configuration. Times are "HH:mm" wall-clock strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityTemplate {
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_day_end")]
    pub day_end: String,
    #[serde(default)]
    pub include_weekends: bool,
}

fn default_day_start() -> String {
    "09:00".to_string()
}

fn default_day_end() -> String {
    "17:00".to_string()
}

impl Default for AvailabilityTemplate {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            day_end: default_day_end(),
            include_weekends: false,
        }
    }
}

impl AvailabilityTemplate {
    /// Expand the template into one block per included day.
    ///
    /// # Errors
    /// Returns an error if either boundary is not a valid `HH:mm` string
    /// or the daily window would be empty.
    pub fn generate(
        &self,
        start_date: DateTime<Utc>,
        days_ahead: u32,
    ) -> Result<Vec<AvailabilityBlock>, ConfigError> {
        let (start_hour, start_min) =
            parse_hhmm(&self.day_start).ok_or_else(|| ConfigError::InvalidValue {
                key: "availability.day_start".to_string(),
                message: format!("'{}' is not a valid HH:mm time", self.day_start),
            })?;
        let (end_hour, end_min) =
            parse_hhmm(&self.day_end).ok_or_else(|| ConfigError::InvalidValue {
                key: "availability.day_end".to_string(),
                message: format!("'{}' is not a valid HH:mm time", self.day_end),
            })?;
        if (end_hour, end_min) <= (start_hour, start_min) {
            return Err(ConfigError::InvalidValue {
                key: "availability.day_end".to_string(),
                message: format!("window {}-{} is empty", self.day_start, self.day_end),
            });
        }

        Ok((0..days_ahead)
            .filter_map(|offset| {
                let day = start_date + Duration::days(i64::from(offset));
                if !self.include_weekends
                    && matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
                {
                    return None;
                }
                day_window(day, start_hour, start_min, end_hour, end_min)
            })
            .collect())
    }
}

/// Build a same-day block between two wall-clock times.
fn day_window(
    day: DateTime<Utc>,
    start_hour: u32,
    start_min: u32,
    end_hour: u32,
    end_min: u32,
) -> Option<AvailabilityBlock> {
    let start = day
        .with_hour(start_hour)?
        .with_minute(start_min)?
        .with_second(0)?
        .with_nanosecond(0)?;
    let end = day
        .with_hour(end_hour)?
        .with_minute(end_min)?
        .with_second(0)?
        .with_nanosecond(0)?;
    Some(AvailabilityBlock { start, end })
}

/// Parse an "HH:mm" string into hour and minute components.
fn parse_hhmm(s: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour: u32 = parts[0].parse().ok()?;
    let minute: u32 = parts[1].parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}
