use clap::Args;
use ritmi_core::{Planner, PlannerConfig, PlannerFile, ScheduleSnapshot};

#[derive(Args)]
pub struct GenerateArgs {
    /// Seed for the random-distribution policy; omit for a fresh spread
    /// on every run
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the generated schedule as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let planner_file = PlannerFile::load_or_default();
    let planner = Planner::with_config(PlannerConfig { seed: args.seed });
    let schedule = planner.generate(&planner_file.variable, &planner_file.fixed);

    let snapshot = ScheduleSnapshot::open_default()?;
    snapshot.save(&schedule)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        let fixed = schedule.all_instances().filter(|i| i.is_fixed).count();
        let flexible = schedule.all_instances().filter(|i| !i.is_fixed).count();
        println!(
            "schedule generated: {fixed} fixed and {flexible} flexible blocks, saved to {}",
            snapshot.path().display()
        );
    }
    Ok(())
}
