// Static content providers
// The weekly schedule ships with the binary; a config entry may swap in another file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::schedule::ScheduleEntry;

const BUNDLED_SCHEDULE: &str = include_str!("../../../data/schedule.json");

pub fn bundled_schedule() -> Result<Vec<ScheduleEntry>> {
    parse_schedule(BUNDLED_SCHEDULE).context("failed to parse bundled schedule")
}

pub fn load_schedule_file(path: &Path) -> Result<Vec<ScheduleEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule from {}", path.display()))?;
    parse_schedule(&data).with_context(|| format!("failed to parse schedule from {}", path.display()))
}

/// Schedule entries in file order. Falls back to the bundled list if the
/// override cannot be used, and to an empty list if even that fails.
pub fn load_schedule(override_path: Option<&Path>) -> Vec<ScheduleEntry> {
    if let Some(path) = override_path {
        match load_schedule_file(path) {
            Ok(entries) => {
                log::info!("Loaded {} schedule entries from {}", entries.len(), path.display());
                return entries;
            }
            Err(e) => log::warn!("{:#}, using bundled schedule", e),
        }
    }

    bundled_schedule().unwrap_or_else(|e| {
        log::error!("{:#}", e);
        Vec::new()
    })
}

fn parse_schedule(json: &str) -> serde_json::Result<Vec<ScheduleEntry>> {
    serde_json::from_str(json)
}
