//! Exhaustive minimax search with move-undo.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::{Strategy, StrategyKind};
use crate::board::{Board, CELLS};
use crate::types::Mark;

/// Outcome of searching a position: the best move and its score.
///
/// Scores are from the searching player's point of view. A win scores
/// `empty squares + 1`, so faster wins and slower losses rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Best cell to play, `None` at a terminal position.
    pub position: Option<usize>,
    /// Minimax value of the position.
    pub score: i32,
}

/// Plays optimally by searching the whole remaining game tree.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    mark: Mark,
    rng: StdRng,
}

impl MinimaxStrategy {
    /// Creates a minimax player seeded from the operating system.
    ///
    /// The generator is only used for the opening move on an empty board.
    pub fn new(mark: Mark) -> Self {
        Self::with_rng(mark, StdRng::from_entropy())
    }

    /// Creates a minimax player with a given generator.
    pub fn with_rng(mark: Mark, rng: StdRng) -> Self {
        Self { mark, rng }
    }

    /// Searches `board` with `to_move` to play.
    ///
    /// Runs on a private copy; `board` is never touched.
    #[instrument(level = "debug", skip(self, board), fields(ai = %self.mark))]
    pub fn evaluate(&self, board: &Board, to_move: Mark) -> Scored {
        let mut scratch = *board;
        let scored = self.minimax(&mut scratch, to_move);
        debug_assert_eq!(&scratch, board, "search must restore the board");
        scored
    }

    fn minimax(&self, board: &mut Board, to_move: Mark) -> Scored {
        let just_moved = to_move.opponent();

        if board.check_winner(just_moved) {
            let magnitude = board.empty_count() as i32 + 1;
            let score = if just_moved == self.mark {
                magnitude
            } else {
                -magnitude
            };
            return Scored {
                position: None,
                score,
            };
        }
        if board.is_full() {
            return Scored {
                position: None,
                score: 0,
            };
        }

        let maximizing = to_move == self.mark;
        let mut best = Scored {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for index in board.available_moves() {
            board.apply_move(index, to_move);
            let child = self.minimax(board, to_move.opponent());
            board.undo_move(index);

            let better = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if better {
                best = Scored {
                    position: Some(index),
                    score: child.score,
                };
            }
        }

        best
    }
}

impl Strategy for MinimaxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Minimax
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn select_move(&mut self, board: &Board) -> Option<usize> {
        // Every opening is equivalent under search; pick one at random.
        if board.empty_count() == CELLS {
            let opening = board.available_moves().choose(&mut self.rng).copied();
            debug!(mark = %self.mark, ?opening, "Minimax opening move");
            return opening;
        }

        let scored = self.evaluate(board, self.mark);
        debug!(
            mark = %self.mark,
            position = ?scored.position,
            score = scored.score,
            "Minimax chose"
        );
        scored.position
    }
}
