use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "walkr", version, about = "Walkr workout generator")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout
    Generate(commands::generate::GenerateArgs),
    /// Browse the exercise catalog
    Catalog(commands::catalog::CatalogArgs),
    /// Saved workouts
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Share a saved workout
    Share(commands::share::ShareArgs),
    /// Run a workout session
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions(commands::completions::CompletionsArgs),
}

/// Logs go to stderr so that stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WALKR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Workout { action } => commands::workout::run(action),
        Commands::Share(args) => commands::share::run(args),
        Commands::Session { action } => commands::session::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
