use clap::Subcommand;
use ritmi_core::templates;

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List built-in templates
    List,
    /// Replace the planner file with a built-in template
    Apply {
        /// Template name (see `template list`)
        name: String,
    },
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TemplateAction::List => {
            for name in templates::names() {
                println!("{name}");
            }
        }
        TemplateAction::Apply { name } => {
            let planner = templates::builtin(&name)
                .ok_or_else(|| format!("unknown template: {name}"))?;
            planner.save()?;
            println!(
                "applied template '{name}' ({} fixed, {} variable)",
                planner.fixed.len(),
                planner.variable.len()
            );
        }
    }
    Ok(())
}
