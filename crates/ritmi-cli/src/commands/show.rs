use clap::Args;
use ritmi_core::{ScheduleSnapshot, WeekDay, WEEK_DAYS};

#[derive(Args)]
pub struct ShowArgs {
    /// Show a single day ("monday".."sunday" or "mon".."sun")
    pub day: Option<String>,
    /// Print JSON instead of the plain listing
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = ScheduleSnapshot::open_default()?;
    if !snapshot.exists() {
        println!("no schedule yet; run `generate` first");
        return Ok(());
    }
    let schedule = snapshot.load()?;

    let days: Vec<WeekDay> = match &args.day {
        Some(name) => vec![WeekDay::from_name(name)?],
        None => WEEK_DAYS.to_vec(),
    };

    if args.json {
        if let Some(name) = &args.day {
            let day = WeekDay::from_name(name)?;
            println!("{}", serde_json::to_string_pretty(schedule.day(day))?);
        } else {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        return Ok(());
    }

    for day in days {
        println!("{}", day.display_name());
        let slots = schedule.day(day);
        if slots.is_empty() {
            println!("  (free)");
        }
        for slot in slots {
            let kind = if slot.is_fixed { "fixed" } else { "flex" };
            println!(
                "  {}-{} {} [{}]",
                slot.start_time, slot.end_time, slot.name, kind
            );
        }
    }
    Ok(())
}
