use clap::Subcommand;
use ritmi_core::{parse_clock, FixedCommitment, PlannerFile, ValidationError};
use uuid::Uuid;

use super::parse_days;

#[derive(Subcommand)]
pub enum FixedAction {
    /// Add a fixed commitment
    Add {
        /// Commitment name
        name: String,
        /// Start time (HH:MM)
        #[arg(long)]
        start: String,
        /// End time (HH:MM)
        #[arg(long)]
        end: String,
        /// Comma-separated days, e.g. "mon,wed,fri"
        #[arg(long)]
        days: String,
        /// Display color, e.g. "#dc3545"
        #[arg(long)]
        color: Option<String>,
    },
    /// List fixed commitments as JSON
    List,
    /// Remove a fixed commitment by id
    Remove {
        /// Commitment id
        id: String,
    },
}

pub fn run(action: FixedAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FixedAction::Add {
            name,
            start,
            end,
            days,
            color,
        } => {
            let start_minutes = parse_clock(&start)?;
            let end_minutes = parse_clock(&end)?;
            if start_minutes >= end_minutes {
                return Err(ValidationError::InvalidTimeRange {
                    start: start.clone(),
                    end: end.clone(),
                }
                .into());
            }

            let commitment = FixedCommitment {
                id: Uuid::new_v4().to_string(),
                name,
                start_time: start,
                end_time: end,
                days: parse_days(&days)?,
                color,
            };

            let mut planner = PlannerFile::load_or_default();
            planner.fixed.push(commitment);
            planner.save()?;
            println!("fixed commitment added");
        }
        FixedAction::List => {
            let planner = PlannerFile::load_or_default();
            println!("{}", serde_json::to_string_pretty(&planner.fixed)?);
        }
        FixedAction::Remove { id } => {
            let mut planner = PlannerFile::load_or_default();
            if planner.remove(&id) {
                planner.save()?;
                println!("removed {id}");
            } else {
                println!("no entry with id {id}");
            }
        }
    }
    Ok(())
}
