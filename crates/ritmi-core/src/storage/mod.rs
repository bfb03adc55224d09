//! Persistence for the planner configuration and the generated schedule.

mod config;
mod snapshot;

pub use config::PlannerFile;
pub use snapshot::ScheduleSnapshot;

use std::path::PathBuf;

/// Returns `~/.config/ritmi[-dev]/` based on RITMI_ENV.
///
/// Set RITMI_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RITMI_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ritmi-dev")
    } else {
        base_dir.join("ritmi")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
