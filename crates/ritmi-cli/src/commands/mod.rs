pub mod config;
pub mod export;
pub mod fixed;
pub mod generate;
pub mod show;
pub mod template;
pub mod variable;

use ritmi_core::{ValidationError, WeekDay};

/// Parse a comma-separated day list ("mon,wed,fri" or full names).
pub fn parse_days(spec: &str) -> Result<Vec<WeekDay>, ValidationError> {
    spec.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(WeekDay::from_name)
        .collect()
}
