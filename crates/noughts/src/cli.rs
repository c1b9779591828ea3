//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use noughts_engine::StrategyKind;

/// Noughts - tic-tac-toe against a minimax or random opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible coin flips and computer moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Ask for mark and strategy again after every round
        #[arg(long)]
        reconfigure: bool,
    },

    /// Play strategies against each other without a UI and print the tally
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strategy that opens each round, playing X (minimax or random)
        #[arg(long, default_value = "minimax")]
        first: StrategyKind,

        /// Strategy that replies, playing O (minimax or random)
        #[arg(long, default_value = "random")]
        second: StrategyKind,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { reconfigure: false }
    }
}
