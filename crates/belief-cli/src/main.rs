use anyhow::{anyhow, Result};
use belief_infrastructure::AppConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "belief")]
#[command(about = "Belief Unlocked - a guided self-reflection questionnaire", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new questionnaire session
    Run,
    /// List completed sessions, newest first
    History,
    /// Show the full summary of one session
    Show {
        /// Session id as printed by `history`
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().map_err(|e| anyhow!(e))?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(&config).await,
        Commands::History => commands::history::execute(&config).await,
        Commands::Show { id } => commands::show::execute(&config, &id).await,
    }
}
