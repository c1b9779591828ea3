//! Game session controller: turn order, round lifecycle, and score.
//!
//! A [`GameSession`] is a small state machine:
//!
//! ```text
//! AwaitingSetup --configure--> HumanTurn | ComputerTurn   (coin flip)
//! HumanTurn     --play_human--> ComputerTurn | RoundOver
//! ComputerTurn  --play_computer--> HumanTurn | RoundOver
//! RoundOver     --start_next_round--> (per RoundPolicy)
//! any           --new_game--> AwaitingSetup
//! ```
//!
//! Every transition is reported as a [`SessionEvent`] which the
//! presentation layer collects with [`GameSession::drain_events`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::error::{MoveError, SetupError};
use crate::position::Position;
use crate::score::Score;
use crate::strategy::{Strategy, StrategyKind};
use crate::types::{GameResult, Mark};

/// Choices made before a round can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Setup {
    /// Mark the human plays.
    pub human: Mark,
    /// Strategy the computer plays.
    pub strategy: StrategyKind,
}

impl Setup {
    /// Mark the computer plays.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }
}

/// What happens after a round ends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum RoundPolicy {
    /// Reset the board and keep mark and strategy.
    #[default]
    #[display("keep settings")]
    KeepSettings,
    /// Return to setup and ask for mark and strategy again.
    #[display("reconfigure")]
    Reconfigure,
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for mark and strategy.
    AwaitingSetup,
    /// Waiting for a human move.
    HumanTurn,
    /// Waiting for the computer to move.
    ComputerTurn,
    /// Round finished with the given result.
    RoundOver(GameResult),
}

/// Notification for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Mark and strategy must be chosen.
    SetupRequired,
    /// A fresh board is in play and `first` moves first.
    RoundStarted {
        /// Mark that opens the round.
        first: Mark,
    },
    /// A mark was placed.
    MovePlayed {
        /// Cell index (0-8).
        index: usize,
        /// Mark placed.
        mark: Mark,
    },
    /// The active turn switched.
    TurnChanged(Phase),
    /// The round ended; `score` already includes it.
    RoundOver {
        /// Final result.
        result: GameResult,
        /// Updated tallies.
        score: Score,
    },
}

/// A move accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Cell index (0-8).
    pub index: usize,
    /// Mark placed.
    pub mark: Mark,
    /// Board result after the move.
    pub result: GameResult,
}

/// One human against one computer strategy, round after round.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    setup: Option<Setup>,
    computer: Option<Box<dyn Strategy>>,
    score: Score,
    policy: RoundPolicy,
    rng: StdRng,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Creates a session seeded from the operating system.
    #[instrument]
    pub fn new(policy: RoundPolicy) -> Self {
        Self::with_rng(policy, StdRng::from_entropy())
    }

    /// Creates a reproducible session.
    #[instrument]
    pub fn with_seed(policy: RoundPolicy, seed: u64) -> Self {
        Self::with_rng(policy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(policy: RoundPolicy, rng: StdRng) -> Self {
        info!(%policy, "Creating game session");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingSetup,
            setup: None,
            computer: None,
            score: Score::new(),
            policy,
            rng,
            events: vec![SessionEvent::SetupRequired],
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the controller state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the running score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the current setup, if configured.
    pub fn setup(&self) -> Option<Setup> {
        self.setup
    }

    /// Returns the round policy.
    pub fn policy(&self) -> RoundPolicy {
        self.policy
    }

    /// Result derived from the board.
    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    /// Mark whose turn it is, if a turn is active.
    pub fn active_mark(&self) -> Option<Mark> {
        let setup = self.setup?;
        match self.phase {
            Phase::HumanTurn => Some(setup.human),
            Phase::ComputerTurn => Some(setup.computer()),
            Phase::AwaitingSetup | Phase::RoundOver(_) => None,
        }
    }

    /// Takes all pending notifications.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Applies setup choices and starts the first round.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NotAwaitingSetup`] outside `AwaitingSetup`.
    #[instrument(skip(self))]
    pub fn configure(&mut self, setup: Setup) -> Result<Phase, SetupError> {
        if self.phase != Phase::AwaitingSetup {
            warn!(phase = ?self.phase, "Setup attempted outside AwaitingSetup");
            return Err(SetupError::NotAwaitingSetup);
        }

        info!(human = %setup.human, strategy = %setup.strategy, "Session configured");
        let seed = self.rng.next_u64();
        self.computer = Some(setup.strategy.build(setup.computer(), seed));
        self.setup = Some(setup);
        Ok(self.start_round())
    }

    /// Parses raw setup answers and configures the session.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidMark`] or [`SetupError::InvalidStrategy`]
    /// for unrecognized answers; the session stays in `AwaitingSetup`.
    #[instrument(skip(self))]
    pub fn configure_from_input(&mut self, mark: &str, strategy: &str) -> Result<Phase, SetupError> {
        let human = mark.parse::<Mark>()?;
        let strategy = strategy.parse::<StrategyKind>()?;
        self.configure(Setup::new(human, strategy))
    }

    /// Plays the human's move at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing anything when it is not the
    /// human's turn, the index is off the board, or the square is taken.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, index: usize) -> Result<MoveRecord, MoveError> {
        let Some(setup) = self.setup.filter(|_| self.phase == Phase::HumanTurn) else {
            warn!(phase = ?self.phase, "Human move outside human turn");
            return Err(MoveError::NotHumanTurn);
        };
        if index >= 9 {
            warn!(index, "Human move out of range");
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.apply_move(index, setup.human) {
            warn!(index, "Human move on occupied square");
            return Err(MoveError::CellOccupied(index));
        }
        Ok(self.complete_move(index, setup.human))
    }

    /// Plays the human's move at a zero-based row and column.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::play_human`].
    pub fn play_human_at(&mut self, row: usize, col: usize) -> Result<MoveRecord, MoveError> {
        let Some(position) = Position::from_row_col(row, col) else {
            warn!(row, col, "Human move out of range");
            return Err(MoveError::OutOfRangeRowCol(row, col));
        };
        self.play_human(position.to_index())
    }

    /// Lets the computer strategy move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotComputerTurn`] outside `ComputerTurn`.
    ///
    /// # Panics
    ///
    /// Panics if the strategy picks an unavailable square or finds no move;
    /// either means the engine itself is broken.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<MoveRecord, MoveError> {
        if self.phase != Phase::ComputerTurn {
            warn!(phase = ?self.phase, "Computer move outside computer turn");
            return Err(MoveError::NotComputerTurn);
        }
        let strategy = self
            .computer
            .as_mut()
            .expect("ComputerTurn is only entered with a configured strategy");
        let mark = strategy.mark();
        let index = strategy.select_move(&self.board).unwrap_or_else(|| {
            panic!("{} strategy found no move on a live board", strategy.kind())
        });
        assert!(
            self.board.apply_move(index, mark),
            "{} strategy chose unavailable square {}",
            strategy.kind(),
            index
        );
        Ok(self.complete_move(index, mark))
    }

    /// Starts the next round once the current one is over.
    ///
    /// With [`RoundPolicy::KeepSettings`] the board is cleared and a new coin
    /// flip decides who opens; with [`RoundPolicy::Reconfigure`] the session
    /// returns to `AwaitingSetup`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::RoundInProgress`] unless the phase is `RoundOver`.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self) -> Result<Phase, SetupError> {
        if !matches!(self.phase, Phase::RoundOver(_)) {
            return Err(SetupError::RoundInProgress);
        }
        Ok(match self.policy {
            RoundPolicy::KeepSettings => self.start_round(),
            RoundPolicy::Reconfigure => self.new_game(),
        })
    }

    /// Abandons the current round and returns to setup. Score is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Phase {
        info!("Returning to setup");
        self.board.reset();
        self.setup = None;
        self.computer = None;
        self.phase = Phase::AwaitingSetup;
        self.events.push(SessionEvent::SetupRequired);
        self.phase
    }

    /// Ends the session, returning the final score.
    #[instrument(skip(self))]
    pub fn finish(self) -> Score {
        info!(score = %self.score, "Session finished");
        self.score
    }

    fn start_round(&mut self) -> Phase {
        self.board.reset();
        let first = if self.rng.gen_bool(0.5) { Mark::X } else { Mark::O };
        self.phase = self.turn_of(first);
        info!(%first, phase = ?self.phase, "Round started");
        self.events.push(SessionEvent::RoundStarted { first });
        self.events.push(SessionEvent::TurnChanged(self.phase));
        self.phase
    }

    fn turn_of(&self, mark: Mark) -> Phase {
        match self.setup {
            Some(setup) if setup.human == mark => Phase::HumanTurn,
            Some(_) => Phase::ComputerTurn,
            None => Phase::AwaitingSetup,
        }
    }

    fn complete_move(&mut self, index: usize, mark: Mark) -> MoveRecord {
        debug!(index, %mark, "Move applied");
        self.events.push(SessionEvent::MovePlayed { index, mark });

        let result = if self.board.check_winner(mark) {
            GameResult::Won(mark)
        } else if self.board.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        };

        if result.is_terminal() {
            let human = self
                .setup
                .map(|setup| setup.human)
                .expect("moves are only applied to a configured session");
            self.score.record(result, human);
            self.phase = Phase::RoundOver(result);
            info!(%result, score = %self.score, "Round over");
            self.events.push(SessionEvent::RoundOver {
                result,
                score: self.score,
            });
        } else {
            self.phase = self.turn_of(mark.opponent());
            self.events.push(SessionEvent::TurnChanged(self.phase));
        }

        MoveRecord {
            index,
            mark,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(policy: RoundPolicy, seed: u64) -> GameSession {
        let mut session = GameSession::with_seed(policy, seed);
        session
            .configure(Setup::new(Mark::X, StrategyKind::Minimax))
            .unwrap();
        session
    }

    /// Always answers the top-left square.
    #[derive(Debug)]
    struct TopLeftOnly(Mark);

    impl Strategy for TopLeftOnly {
        fn kind(&self) -> StrategyKind {
            StrategyKind::Random
        }

        fn mark(&self) -> Mark {
            self.0
        }

        fn select_move(&mut self, _board: &Board) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    #[should_panic(expected = "unavailable square")]
    fn test_computer_choosing_occupied_square_panics() {
        let mut session = (0..64)
            .map(|seed| configured(RoundPolicy::KeepSettings, seed))
            .find(|session| session.phase() == Phase::ComputerTurn)
            .expect("some seed lets the computer open");
        session.computer = Some(Box::new(TopLeftOnly(Mark::O)));
        session.board.apply_move(0, Mark::X);
        let _ = session.play_computer();
    }

    #[test]
    fn test_starts_awaiting_setup() {
        let mut session = GameSession::with_seed(RoundPolicy::KeepSettings, 1);
        assert_eq!(session.phase(), Phase::AwaitingSetup);
        assert_eq!(session.active_mark(), None);
        assert_eq!(session.drain_events(), vec![SessionEvent::SetupRequired]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_configure_picks_a_turn_for_the_opening_mark() {
        let mut session = configured(RoundPolicy::KeepSettings, 2);
        let events = session.drain_events();
        let Some(SessionEvent::RoundStarted { first }) = events.get(1).copied() else {
            panic!("expected RoundStarted, got {:?}", events);
        };
        let expected = if first == Mark::X {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        };
        assert_eq!(session.phase(), expected);
        assert_eq!(session.active_mark(), Some(first));
    }

    #[test]
    fn test_configure_twice_rejected() {
        let mut session = configured(RoundPolicy::KeepSettings, 3);
        assert_eq!(
            session.configure(Setup::new(Mark::O, StrategyKind::Random)),
            Err(SetupError::NotAwaitingSetup)
        );
    }

    #[test]
    fn test_wrong_turn_requests_rejected() {
        let mut session = GameSession::with_seed(RoundPolicy::KeepSettings, 4);
        assert_eq!(session.play_human(0), Err(MoveError::NotHumanTurn));
        assert_eq!(session.play_computer(), Err(MoveError::NotComputerTurn));
    }

    #[test]
    fn test_next_round_requires_round_over() {
        let mut session = configured(RoundPolicy::KeepSettings, 5);
        assert_eq!(
            session.start_next_round(),
            Err(SetupError::RoundInProgress)
        );
    }
}
