//! Task urgency scoring.
//!
//! Produces the ordering key for the scheduling loop from two factors:
//! - user-assigned priority score (0-100)
//! - deadline proximity (closer = higher urgency)
//!
//! Tasks due within a day or overdue short-circuit to [`MAX_URGENCY`]
//! so they always sort ahead of work with room to spare.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Urgency assigned to tasks whose deadline is today or already past.
pub const MAX_URGENCY: f64 = 10_000.0;

/// Urgency calculation weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyWeights {
    /// Weight for the user-assigned priority score (default 0.6)
    #[serde(default = "default_priority_weight")]
    pub priority_weight: f64,
    /// Weight for deadline proximity (default 0.4)
    #[serde(default = "default_deadline_weight")]
    pub deadline_weight: f64,
}

fn default_priority_weight() -> f64 {
    0.6
}

fn default_deadline_weight() -> f64 {
    0.4
}

impl Default for UrgencyWeights {
    fn default() -> Self {
        Self {
            priority_weight: default_priority_weight(),
            deadline_weight: default_deadline_weight(),
        }
    }
}

/// Urgency calculator for tasks
pub struct UrgencyScorer {
    weights: UrgencyWeights,
}

impl UrgencyScorer {
    /// Create a new scorer with default weights
    pub fn new() -> Self {
        Self {
            weights: UrgencyWeights::default(),
        }
    }

    /// Create with custom weights
    pub fn with_weights(weights: UrgencyWeights) -> Self {
        Self { weights }
    }

    /// Calculate the urgency score for a task at a given reference time.
    ///
    /// Days until due are whole days, truncated toward zero, measured
    /// against the raw deadline (the lead time buffer narrows the
    /// placement window, not the ordering). Zero or negative days yield
    /// [`MAX_URGENCY`]; otherwise the score is the weighted sum of the
    /// priority score and the inverse day count scaled to 0-100.
    pub fn calculate_urgency(&self, task: &Task, now: DateTime<Utc>) -> f64 {
        let days_until_due = (task.deadline_date - now).num_days();
        if days_until_due <= 0 {
            return MAX_URGENCY;
        }

        let priority_component = f64::from(task.priority_score) * self.weights.priority_weight;
        let deadline_component =
            (1.0 / days_until_due as f64) * 100.0 * self.weights.deadline_weight;
        priority_component + deadline_component
    }
}

impl Default for UrgencyScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to calculate urgency with default weights
pub fn calculate_urgency(task: &Task, now: DateTime<Utc>) -> f64 {
    UrgencyScorer::new().calculate_urgency(task, now)
}
