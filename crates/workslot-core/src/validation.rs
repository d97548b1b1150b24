//! Input validation for scheduling requests.
//!
//! Runs before any capacity is touched. The first offending record
//! aborts the whole call; the run never proceeds with partially valid
//! data.

use std::collections::HashSet;

use crate::availability::AvailabilityBlock;
use crate::error::ValidationError;
use crate::task::Task;

/// Check every task and availability block ahead of a scheduling run.
pub fn validate_inputs(
    tasks: &[Task],
    availability: &[AvailabilityBlock],
) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::new();

    for task in tasks {
        if task.estimated_minutes == 0 {
            return Err(ValidationError::ZeroEstimate {
                task_id: task.id.clone(),
            });
        }
        if task.priority_score > 100 {
            return Err(ValidationError::PriorityOutOfRange {
                task_id: task.id.clone(),
                value: task.priority_score,
            });
        }
        if task.lead_time_buffer_days > 5 {
            return Err(ValidationError::LeadTimeOutOfRange {
                task_id: task.id.clone(),
                value: task.lead_time_buffer_days,
            });
        }
        if !seen_ids.insert(task.id.as_str()) {
            return Err(ValidationError::DuplicateTaskId {
                task_id: task.id.clone(),
            });
        }
    }

    for block in availability {
        if block.end <= block.start {
            return Err(ValidationError::InvalidTimeRange {
                start: block.start,
                end: block.end,
            });
        }
    }

    Ok(())
}
