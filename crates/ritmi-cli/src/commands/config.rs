use clap::Subcommand;
use ritmi_core::PlannerFile;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the planner file path
    Path,
    /// Print the planner file as JSON
    Show,
    /// Set the display timezone label
    SetTimezone {
        /// IANA timezone name, e.g. "Europe/Madrid"
        timezone: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Path => {
            println!("{}", PlannerFile::path()?.display());
        }
        ConfigAction::Show => {
            let planner = PlannerFile::load_or_default();
            println!("{}", serde_json::to_string_pretty(&planner)?);
        }
        ConfigAction::SetTimezone { timezone } => {
            let mut planner = PlannerFile::load_or_default();
            planner.timezone = Some(timezone);
            planner.save()?;
            println!("timezone updated");
        }
    }
    Ok(())
}
