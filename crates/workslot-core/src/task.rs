//! Task input types.
//!
//! A [`Task`] is the unit of pending work handed to the scheduler:
//! an estimated duration, a hard deadline, a priority score, and an
//! optional lead time buffer that pulls the effective deadline forward.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A unit of pending work to be placed into availability blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub estimated_minutes: u32,
    pub deadline_date: DateTime<Utc>,
    pub priority_score: u8, // 0-100
    #[serde(default)]
    pub lead_time_buffer_days: u8, // 0-5
}

impl Task {
    /// Create a new task with a neutral priority and no lead time buffer.
    pub fn new(
        id: impl Into<String>,
        estimated_minutes: u32,
        deadline_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: None,
            estimated_minutes,
            deadline_date,
            priority_score: 50,
            lead_time_buffer_days: 0,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the priority score
    pub fn with_priority(mut self, priority_score: u8) -> Self {
        self.priority_score = priority_score.min(100);
        self
    }

    /// Set the lead time buffer in days
    pub fn with_lead_time(mut self, days: u8) -> Self {
        self.lead_time_buffer_days = days.min(5);
        self
    }

    /// Deadline pulled forward by the lead time buffer. No session of
    /// this task may start after this instant.
    pub fn effective_deadline(&self) -> DateTime<Utc> {
        self.deadline_date - Duration::days(i64::from(self.lead_time_buffer_days))
    }
}
