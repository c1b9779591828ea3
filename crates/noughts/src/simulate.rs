//! Headless strategy-versus-strategy rounds.

use noughts_engine::{GameResult, Mark, StrategyKind, play_round};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, instrument};

/// Outcome counts over a batch of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds won by the opening strategy (X).
    pub first_wins: u32,
    /// Rounds won by the replying strategy (O).
    pub second_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished round.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Won(Mark::X) => self.first_wins += 1,
            GameResult::Won(Mark::O) => self.second_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    /// Rounds counted.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

/// Plays `games` rounds of `first` (as X, opening) against `second` (as O).
#[instrument]
pub fn run_simulation(games: u32, first: StrategyKind, second: StrategyKind, seed: Option<u64>) -> Tally {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tally = Tally::default();
    for _ in 0..games {
        let mut x = first.build(Mark::X, rng.next_u64());
        let mut o = second.build(Mark::O, rng.next_u64());
        tally.record(play_round(x.as_mut(), o.as_mut()));
    }

    info!(?tally, "Simulation finished");
    tally
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games - first (X) wins: {}, second (O) wins: {}, draws: {}",
            self.games(),
            self.first_wins,
            self.second_wins,
            self.draws
        )
    }
}
