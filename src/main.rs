use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use savings_goals::cli::{handle_goal_command, GoalCommands, OutputOptions};
use savings_goals::config::{SavingsPaths, Settings};
use savings_goals::snapshot::BudgetSnapshot;

#[derive(Parser)]
#[command(
    name = "goals",
    version,
    about = "Track progress toward savings goals",
    long_about = "Shows how far each savings goal has come from its starting balance \
                  and the savings recorded under its category, and prepares goal \
                  changes for the budget that owns them."
)]
struct Cli {
    /// Snapshot file with goals, items and categories
    #[arg(long, global = true, env = "SAVINGS_GOALS_DATA")]
    data: Option<PathBuf>,

    /// Currency symbol (overrides the configured one)
    #[arg(long, global = true)]
    symbol: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Seed for the default color of new goals
    #[arg(long, global = true, env = "SAVINGS_GOALS_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Goal(GoalCommands),

    /// Show current configuration and paths
    Config,
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = SavingsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Snapshot file:  {}", settings.snapshot_file(&paths).display());
            println!();
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
        }

        Commands::Goal(cmd) => {
            let data = cli.data.unwrap_or_else(|| settings.snapshot_file(&paths));
            let snapshot = BudgetSnapshot::load(&data)?;
            if let Err(e) = snapshot.validate() {
                tracing::warn!("{}", e);
            }

            let options = OutputOptions {
                symbol: cli.symbol.unwrap_or(settings.currency_symbol),
                date_format: settings.date_format,
                json: cli.json,
                seed: cli.seed,
            };

            handle_goal_command(&snapshot, &options, cmd)?;
        }
    }

    Ok(())
}
