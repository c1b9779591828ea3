//! Running score across rounds.

use serde::{Deserialize, Serialize};

use crate::types::{GameResult, Mark};

/// Human wins, computer wins, and ties for the lifetime of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    human_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Rounds won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Drawn rounds.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }

    /// Adds one to the counter matching `result`.
    ///
    /// Returns `false` and records nothing for an unfinished round.
    pub fn record(&mut self, result: GameResult, human: Mark) -> bool {
        match result {
            GameResult::InProgress => return false,
            GameResult::Won(mark) if mark == human => self.human_wins += 1,
            GameResult::Won(_) => self.computer_wins += 1,
            GameResult::Draw => self.ties += 1,
        }
        true
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score - You: {} AI: {} Ties: {}",
            self.human_wins, self.computer_wins, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome_once() {
        let mut score = Score::new();
        assert!(score.record(GameResult::Won(Mark::O), Mark::O));
        assert!(score.record(GameResult::Won(Mark::X), Mark::O));
        assert!(score.record(GameResult::Draw, Mark::O));
        assert!(!score.record(GameResult::InProgress, Mark::O));
        assert_eq!(
            (score.human_wins(), score.computer_wins(), score.ties()),
            (1, 1, 1)
        );
        assert_eq!(score.rounds(), 3);
    }

    #[test]
    fn test_display_matches_status_line() {
        let mut score = Score::new();
        score.record(GameResult::Draw, Mark::X);
        assert_eq!(score.to_string(), "Score - You: 0 AI: 0 Ties: 1");
    }
}
