//! # Workslot Core Library
//!
//! This library provides the scheduling core for Workslot: it allocates
//! pending tasks into availability blocks over a planning horizon. All
//! operations are available via a standalone CLI binary, with the core
//! kept free of I/O so any caller that can produce the input shapes can
//! drive it.
//!
//! ## Architecture
//!
//! - **Urgency**: Converts priority and deadline proximity into the
//!   ordering key for placement
//! - **Splitting**: Partitions oversized estimates into bounded sessions
//! - **Scheduler**: Greedy first-fit placement with per-task rollback
//! - **Availability**: Block inputs, templates, and the default
//!   weekday-window generator
//! - **Stats**: Capacity and utilization reporting over a finished run
//!
//! ## Key Components
//!
//! - [`Scheduler`]: The scheduling engine
//! - [`Task`] / [`AvailabilityBlock`]: Input records
//! - [`ScheduleResult`]: Placed sessions plus unplaceable tasks
//! - [`SchedulerConfig`]: TOML-backed tuning knobs

pub mod availability;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod split;
pub mod stats;
pub mod task;
pub mod urgency;
pub mod validation;

pub use availability::{generate_default_availability, AvailabilityBlock, AvailabilityTemplate};
pub use config::SchedulerConfig;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use scheduler::{
    schedule_tasks, AssignedSlot, AvailabilityTracker, ScheduleResult, ScheduledTask, Scheduler,
    UnscheduledReason, UnscheduledTask,
};
pub use split::TaskSplitter;
pub use stats::{calculate_capacity_stats, CapacityStats};
pub use task::Task;
pub use urgency::{calculate_urgency, UrgencyScorer, UrgencyWeights, MAX_URGENCY};
pub use validation::validate_inputs;
