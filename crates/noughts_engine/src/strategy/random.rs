//! Uniform random move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::{Strategy, StrategyKind};
use crate::board::Board;
use crate::types::Mark;

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    mark: Mark,
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a random player seeded from the operating system.
    pub fn new(mark: Mark) -> Self {
        Self::with_rng(mark, StdRng::from_entropy())
    }

    /// Creates a random player with a given generator.
    pub fn with_rng(mark: Mark, rng: StdRng) -> Self {
        Self { mark, rng }
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn select_move(&mut self, board: &Board) -> Option<usize> {
        let choice = board.available_moves().choose(&mut self.rng).copied();
        debug!(mark = %self.mark, ?choice, "Random strategy chose");
        choice
    }
}
