use clap::Subcommand;
use ritmi_core::{PlannerFile, ValidationError, VariableActivity};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum VariableAction {
    /// Add a variable activity
    Add {
        /// Activity name
        name: String,
        /// Total hours per week
        #[arg(long)]
        hours: f64,
        /// Spread the hours evenly across the week
        #[arg(long)]
        evenly: bool,
        /// Display color, e.g. "#28a745"
        #[arg(long)]
        color: Option<String>,
    },
    /// List variable activities as JSON
    List,
    /// Remove a variable activity by id
    Remove {
        /// Activity id
        id: String,
    },
}

pub fn run(action: VariableAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        VariableAction::Add {
            name,
            hours,
            evenly,
            color,
        } => {
            if !hours.is_finite() || hours < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: "hours".to_string(),
                    message: "must be a non-negative number".to_string(),
                }
                .into());
            }

            let activity = VariableActivity {
                id: Uuid::new_v4().to_string(),
                name,
                total_hours: hours,
                distribute_evenly: evenly,
                color,
            };

            let mut planner = PlannerFile::load_or_default();
            planner.variable.push(activity);
            planner.save()?;
            println!("variable activity added");
        }
        VariableAction::List => {
            let planner = PlannerFile::load_or_default();
            println!("{}", serde_json::to_string_pretty(&planner.variable)?);
        }
        VariableAction::Remove { id } => {
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
