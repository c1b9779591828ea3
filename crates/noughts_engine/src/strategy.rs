//! Computer move selection.
//!
//! A [`Strategy`] is bound to the mark it plays and picks a cell index for
//! the board it is shown. Two variants exist: uniform random choice and
//! exhaustive minimax search.

mod minimax;
mod random;

pub use minimax::{MinimaxStrategy, Scored};
pub use random::RandomStrategy;

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::SetupError;
use crate::types::Mark;

/// Trait for computer players that choose moves.
pub trait Strategy: fmt::Debug + Send {
    /// Which variant this is.
    fn kind(&self) -> StrategyKind;

    /// The mark this strategy plays.
    fn mark(&self) -> Mark;

    /// Picks an empty cell index on `board`.
    ///
    /// Returns `None` only when the board has no empty squares; callers
    /// never ask for a move in that state.
    fn select_move(&mut self, board: &Board) -> Option<usize>;
}

/// Strategy selection offered at setup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Optimal play by exhaustive search.
    #[display("minimax")]
    Minimax,
    /// Uniformly random legal moves.
    #[display("random")]
    Random,
}

impl StrategyKind {
    /// Menu label shown during setup.
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Minimax => "Smart AI (minimax)",
            StrategyKind::Random => "Random AI",
        }
    }

    /// Menu key used during setup.
    pub fn menu_key(self) -> char {
        match self {
            StrategyKind::Minimax => '1',
            StrategyKind::Random => '2',
        }
    }

    /// Builds a strategy for `mark` seeded from `seed`.
    pub fn build(self, mark: Mark, seed: u64) -> Box<dyn Strategy> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            StrategyKind::Minimax => Box::new(MinimaxStrategy::with_rng(mark, rng)),
            StrategyKind::Random => Box::new(RandomStrategy::with_rng(mark, rng)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "minimax" | "smart" => Ok(StrategyKind::Minimax),
            "2" | "random" => Ok(StrategyKind::Random),
            _ => Err(SetupError::InvalidStrategy(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_choices() {
        assert_eq!("1".parse::<StrategyKind>(), Ok(StrategyKind::Minimax));
        assert_eq!(" Minimax ".parse::<StrategyKind>(), Ok(StrategyKind::Minimax));
        assert_eq!("2".parse::<StrategyKind>(), Ok(StrategyKind::Random));
        assert_eq!(
            "3".parse::<StrategyKind>(),
            Err(SetupError::InvalidStrategy("3".to_string()))
        );
    }

    #[test]
    fn test_build_binds_mark_and_kind() {
        let strategy = StrategyKind::Random.build(Mark::O, 7);
        assert_eq!(strategy.kind(), StrategyKind::Random);
        assert_eq!(strategy.mark(), Mark::O);
    }

    #[test]
    fn test_menu_key_parses_back() {
        use strum::IntoEnumIterator;
        for kind in StrategyKind::iter() {
            assert_eq!(kind.menu_key().to_string().parse::<StrategyKind>(), Ok(kind));
        }
    }
}
