use std::path::Path;

use super::config::load_config;
use super::parse_reference_time;

pub fn run(
    start: Option<&str>,
    days: Option<u32>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let start = parse_reference_time(start)?;
    let days = days.unwrap_or(config.horizon_days);

    let blocks = config.availability.generate(start, days)?;
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}
