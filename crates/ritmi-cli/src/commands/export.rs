use std::path::PathBuf;

use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::Subcommand;
use ritmi_core::{export, ScheduleSnapshot};

#[derive(Subcommand)]
pub enum ExportAction {
    /// Export as CSV
    Csv {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export as iCalendar
    Ical {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Monday the week starts on (YYYY-MM-DD); defaults to the
        /// current week
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },
}

/// Monday of the current local week.
fn current_week_start() -> NaiveDate {
    let today = Local::now().date_naive();
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

fn emit(content: String, out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("exported to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = ScheduleSnapshot::open_default()?;
    if !snapshot.exists() {
        return Err("no schedule yet; run `generate` first".into());
    }
    let schedule = snapshot.load()?;

    match action {
        ExportAction::Csv { out } => emit(export::to_csv(&schedule), out),
        ExportAction::Ical { out, week_start } => {
            let monday = week_start.unwrap_or_else(current_week_start);
            emit(export::to_ical(&schedule, monday), out)
        }
    }
}
