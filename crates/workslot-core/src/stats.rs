//! Capacity reporting over a scheduling outcome.

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityBlock;
use crate::scheduler::ScheduleResult;

/// Aggregate capacity usage for one scheduling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityStats {
    /// Sum of all availability block durations in minutes
    pub total_capacity_minutes: i64,
    /// Sum of all assigned interval durations in minutes
    pub used_capacity_minutes: i64,
    /// Used share of total capacity in percent (0.0 when there is no
    /// capacity at all)
    pub utilization_rate: f64,
}

/// Sum capacity and usage across a run.
pub fn calculate_capacity_stats(
    availability: &[AvailabilityBlock],
    result: &ScheduleResult,
) -> CapacityStats {
    let total_capacity_minutes: i64 = availability
        .iter()
        .map(AvailabilityBlock::duration_minutes)
        .sum();
    let used_capacity_minutes: i64 = result
        .schedule
        .iter()
        .map(|placed| placed.assigned_slot.duration_minutes())
        .sum();

    let utilization_rate = if total_capacity_minutes > 0 {
        used_capacity_minutes as f64 / total_capacity_minutes as f64 * 100.0
    } else {
        0.0
    };

    CapacityStats {
        total_capacity_minutes,
        used_capacity_minutes,
        utilization_rate,
    }
}
