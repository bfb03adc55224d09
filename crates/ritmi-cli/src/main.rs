use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ritmi-cli", version, about = "Ritmi weekly planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed weekly commitments
    Fixed {
        #[command(subcommand)]
        action: commands::fixed::FixedAction,
    },
    /// Variable weekly activities
    Variable {
        #[command(subcommand)]
        action: commands::variable::VariableAction,
    },
    /// Built-in planner templates
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Generate the weekly schedule
    Generate(commands::generate::GenerateArgs),
    /// Show the stored schedule
    Show(commands::show::ShowArgs),
    /// Export the stored schedule
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Planner file management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Fixed { action } => commands::fixed::run(action),
        Commands::Variable { action } => commands::variable::run(action),
        Commands::Template { action } => commands::template::run(action),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Export { action } => commands::export::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
