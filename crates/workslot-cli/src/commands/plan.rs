//! Planning command: schedule tasks from a JSON input file.

use std::path::Path;

use serde::Deserialize;
use workslot_core::{AvailabilityBlock, Scheduler, Task};

use super::config::load_config;
use super::parse_reference_time;

/// Input document for a planning run.
#[derive(Debug, Deserialize)]
pub struct PlanInput {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub availability: Vec<AvailabilityBlock>,
}

pub fn run(
    input_path: &Path,
    now: Option<&str>,
    config_path: Option<&Path>,
    default_availability: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let content = std::fs::read_to_string(input_path)?;
    let input: PlanInput = serde_json::from_str(&content)?;

    let now = parse_reference_time(now)?;
    let availability = if default_availability {
        config.availability.generate(now, config.horizon_days)?
    } else {
        input.availability
    };

    let scheduler = Scheduler::with_config(config);
    let result = scheduler.schedule_at(&input.tasks, &availability, now)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    eprintln!(
        "planned {} sessions, {} tasks unscheduled",
        result.schedule.len(),
        result.unscheduled.len()
    );
    for entry in &result.unscheduled {
        eprintln!("  {}: {}", entry.task_id, entry.reason.as_str());
    }
    Ok(())
}
