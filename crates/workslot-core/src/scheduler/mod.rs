//! Greedy deadline-aware task scheduling.
//!
//! This module packs task sessions into availability blocks:
//! - Tasks are ordered by urgency, highest first; input position breaks
//!   ties so identical inputs always produce identical plans
//! - Oversized estimates are split into bounded sessions before placement
//! - Each session goes to the first block (in caller order) with enough
//!   remaining capacity whose fill position respects the task's
//!   effective deadline
//! - A task either gets all of its sessions or none: partial placements
//!   are rolled back and the task is reported unscheduled

pub mod tracker;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::AvailabilityBlock;
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::split::TaskSplitter;
use crate::task::Task;
use crate::urgency::UrgencyScorer;
use crate::validation::validate_inputs;

pub use tracker::AvailabilityTracker;

/// An absolute time interval committed inside one availability block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AssignedSlot {
    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// One placed session of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub task_id: String,
    pub assigned_slot: AssignedSlot,
    /// 1-based session number, present only when the task was split
    /// into more than one session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_index: Option<u32>,
}

/// Why a task could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnscheduledReason {
    /// Not even the first session fit anywhere
    NoCapacity,
    /// Some sessions fit but not all; the placements were rolled back
    InsufficientCapacity,
}

impl UnscheduledReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCapacity => "No available capacity within deadline window",
            Self::InsufficientCapacity => "Insufficient capacity to complete all sessions",
        }
    }
}

/// A task left out of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnscheduledTask {
    pub task_id: String,
    pub reason: UnscheduledReason,
}

/// Outcome of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub schedule: Vec<ScheduledTask>,
    pub unscheduled: Vec<UnscheduledTask>,
}

/// Greedy scheduler for tasks over availability blocks
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Create a new scheduler with default config
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Plan tasks against the current wall clock.
    pub fn schedule(
        &self,
        tasks: &[Task],
        availability: &[AvailabilityBlock],
    ) -> Result<ScheduleResult> {
        self.schedule_at(tasks, availability, Utc::now())
    }

    /// Plan tasks with an explicit reference time.
    ///
    /// Blocks are consumed in the order supplied and are never sorted
    /// here; pass them chronologically for earliest-first placement.
    ///
    /// # Errors
    /// Returns an error for malformed input records or unusable limits
    /// in the configuration. Unplaceable tasks are ordinary output in
    /// `unscheduled`, not errors.
    pub fn schedule_at(
        &self,
        tasks: &[Task],
        availability: &[AvailabilityBlock],
        now: DateTime<Utc>,
    ) -> Result<ScheduleResult> {
        self.config.validate()?;
        validate_inputs(tasks, availability)?;

        debug!(
            "scheduling {} tasks into {} availability blocks",
            tasks.len(),
            availability.len()
        );

        let scorer = UrgencyScorer::with_weights(self.config.urgency.clone());
        let splitter = TaskSplitter::with_limits(
            self.config.max_session_minutes,
            self.config.min_chunk_minutes,
        );

        let mut ranked: Vec<(usize, &Task, f64)> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (index, task, scorer.calculate_urgency(task, now)))
            .collect();
        ranked.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let mut tracker = AvailabilityTracker::new(availability);
        let mut schedule = Vec::new();
        let mut unscheduled = Vec::new();

        for (_, task, urgency) in ranked {
            let sessions = splitter.split(task.estimated_minutes);
            let split_count = sessions.len();
            let effective_deadline = task.effective_deadline();

            let mut placements: Vec<ScheduledTask> = Vec::with_capacity(split_count);
            let mut commits: Vec<(usize, i64)> = Vec::with_capacity(split_count);
            let mut fully_placed = true;

            for (session_number, &session_minutes) in sessions.iter().enumerate() {
                let minutes = i64::from(session_minutes);
                let mut placed = false;

                for slot in 0..tracker.len() {
                    if tracker.remaining_minutes(slot) < minutes {
                        continue;
                    }
                    if tracker.next_start(slot) > effective_deadline {
                        continue;
                    }

                    let assigned = tracker.commit(slot, minutes);
                    commits.push((slot, minutes));
                    placements.push(ScheduledTask {
                        task_id: task.id.clone(),
                        assigned_slot: assigned,
                        session_index: (split_count > 1).then_some(session_number as u32 + 1),
                    });
                    placed = true;
                    break;
                }

                if !placed {
                    fully_placed = false;
                    break;
                }
            }

            if fully_placed {
                schedule.extend(placements);
            } else {
                // Undo this task's commits in reverse so the fill
                // positions unwind cleanly.
                for &(slot, minutes) in commits.iter().rev() {
                    tracker.release(slot, minutes);
                }
                let reason = if commits.is_empty() {
                    UnscheduledReason::NoCapacity
                } else {
                    UnscheduledReason::InsufficientCapacity
                };
                debug!(
                    "task {} unscheduled (urgency {:.1}): {}",
                    task.id,
                    urgency,
                    reason.as_str()
                );
                unscheduled.push(UnscheduledTask {
                    task_id: task.id.clone(),
                    reason,
                });
            }
        }

        Ok(ScheduleResult {
            schedule,
            unscheduled,
        })
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to schedule with the default config and an
/// explicit reference time
pub fn schedule_tasks(
    tasks: &[Task],
    availability: &[AvailabilityBlock],
    now: DateTime<Utc>,
) -> Result<ScheduleResult> {
    Scheduler::new().schedule_at(tasks, availability, now)
}
