//! Noughts - unified CLI.

use anyhow::Result;
use clap::Parser;
use noughts::logging::{init_file_logging, init_stderr_logging};
use noughts::{AppConfig, Cli, Command, run_simulation, run_tui};
use noughts_engine::RoundPolicy;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play { reconfigure } => {
            let config = if reconfigure {
                config.with_round_policy(RoundPolicy::Reconfigure)
            } else {
                config
            };
            init_file_logging(&config)?;
            let score = run_tui(config, cli.seed).await?;
            println!("{}", score);
            Ok(())
        }
        Command::Simulate {
            games,
            first,
            second,
        } => {
            init_stderr_logging(&config);
            info!(games, %first, %second, "Running simulation");
            let tally = run_simulation(games, first, second, cli.seed);
            println!("{first} (X) vs {second} (O)");
            println!("{}", tally);
            Ok(())
        }
    }
}
