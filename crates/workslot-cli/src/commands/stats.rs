use std::path::Path;

use workslot_core::{calculate_capacity_stats, ScheduleResult};

use super::plan::PlanInput;

pub fn run(input_path: &Path, result_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let input_content = std::fs::read_to_string(input_path)?;
    let input: PlanInput = serde_json::from_str(&input_content)?;

    let result_content = std::fs::read_to_string(result_path)?;
    let result: ScheduleResult = serde_json::from_str(&result_content)?;

    let stats = calculate_capacity_stats(&input.availability, &result);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
