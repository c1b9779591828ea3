//! Noughts engine - tic-tac-toe game logic for a human against the computer.
//!
//! # Architecture
//!
//! - **Board**: nine squares with apply/undo moves and winner queries
//! - **Rules**: the eight winning lines and pure result evaluation
//! - **Strategies**: random choice and exhaustive minimax search
//! - **Session**: turn order, round lifecycle, and the running score
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameSession, Mark, Phase, RoundPolicy, Setup, StrategyKind};
//!
//! let mut session = GameSession::with_seed(RoundPolicy::KeepSettings, 7);
//! session.configure(Setup::new(Mark::X, StrategyKind::Minimax))?;
//!
//! while !matches!(session.phase(), Phase::RoundOver(_)) {
//!     match session.phase() {
//!         Phase::HumanTurn => {
//!             let index = session.board().available_moves()[0];
//!             session.play_human(index)?;
//!         }
//!         _ => {
//!             session.play_computer()?;
//!         }
//!     }
//! }
//! assert_eq!(session.score().rounds(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod board;
mod error;
mod position;
pub mod rules;
mod score;
mod session;
mod strategy;
mod types;

pub use arena::play_round;
pub use board::{Board, CELLS};
pub use error::{MoveError, ParseBoardError, SetupError};
pub use position::Position;
pub use score::Score;
pub use session::{GameSession, MoveRecord, Phase, RoundPolicy, SessionEvent, Setup};
pub use strategy::{MinimaxStrategy, RandomStrategy, Scored, Strategy, StrategyKind};
pub use types::{GameResult, Mark, Square};
