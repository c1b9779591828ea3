//! Noughts - play tic-tac-toe against the computer in the terminal.
//!
//! The game logic lives in [`noughts_engine`]; this crate adds the
//! command line, configuration, logging, the terminal UI, and a headless
//! simulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod simulate;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use simulate::{Tally, run_simulation};
pub use tui::run_tui;
