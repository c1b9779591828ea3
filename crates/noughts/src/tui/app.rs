//! Application state and logic.
//!
//! [`App`] turns key presses and elapsed timers into session calls and
//! session events into what the screen shows. It never touches the
//! terminal, so it can be driven directly in tests.

use crossterm::event::KeyCode;
use noughts_engine::{
    GameResult, GameSession, Mark, MoveError, Phase, Position, Score, SessionEvent, Setup,
    StrategyKind, rules,
};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_to_index, move_cursor};

/// Work the event loop performs after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Let the computer play.
    ComputerMove,
    /// Leave the finished board and start the next round.
    NextRound,
}

/// Request from the app to the event loop's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Schedule an action, replacing any pending one.
    Start(Deferred),
    /// Drop the pending action.
    Cancel,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the application.
    Quit,
}

/// Answers collected on the setup screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupForm {
    mark: Option<Mark>,
}

impl SetupForm {
    /// Mark chosen so far.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    form: SetupForm,
    cursor: Position,
    status: String,
    last_computer_move: Option<usize>,
    timer_commands: Vec<TimerCommand>,
}

impl App {
    /// Creates the app around a fresh session.
    #[instrument(skip(session))]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            form: SetupForm::default(),
            cursor: Position::Center,
            status: String::new(),
            last_computer_move: None,
            timer_commands: Vec::new(),
        };
        app.sync();
        app
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Setup answers so far.
    pub fn form(&self) -> SetupForm {
        self.form
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Square the computer played last this round.
    pub fn last_computer_move(&self) -> Option<usize> {
        self.last_computer_move
    }

    /// Completed line to highlight on a won board.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(self.session.board())
    }

    /// Takes timer requests raised since the last call.
    pub fn take_timer_commands(&mut self) -> Vec<TimerCommand> {
        std::mem::take(&mut self.timer_commands)
    }

    /// Ends the app, returning the final score.
    pub fn into_score(self) -> Score {
        self.session.finish()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => {
                info!("User quit");
                self.timer_commands.push(TimerCommand::Cancel);
                return Control::Quit;
            }
            KeyCode::Char('n') => {
                self.session.new_game();
            }
            _ if self.session.phase() == Phase::AwaitingSetup => self.handle_setup_key(key),
            _ => self.handle_board_key(key),
        }
        self.sync();
        Control::Continue
    }

    /// Runs an action whose delay elapsed.
    ///
    /// Actions that no longer match the session phase are ignored, so a
    /// timer racing a new game has no effect.
    #[instrument(skip(self))]
    pub fn fire(&mut self, deferred: Deferred) {
        match (deferred, self.session.phase()) {
            (Deferred::ComputerMove, Phase::ComputerTurn) => {
                if let Err(e) = self.session.play_computer() {
                    warn!(error = %e, "Computer move rejected");
                }
            }
            (Deferred::NextRound, Phase::RoundOver(_)) => {
                if let Err(e) = self.session.start_next_round() {
                    warn!(error = %e, "Next round rejected");
                }
            }
            (deferred, phase) => {
                debug!(?deferred, ?phase, "Stale deferred action ignored");
            }
        }
        self.sync();
    }

    fn handle_setup_key(&mut self, key: KeyCode) {
        let KeyCode::Char(c) = key else {
            return;
        };
        match self.form.mark {
            None => match c.to_string().parse::<Mark>() {
                Ok(mark) => {
                    self.form.mark = Some(mark);
                    self.status = strategy_prompt();
                }
                Err(e) => self.status = format!("{}. Do you want to be X or O?", e),
            },
            Some(mark) => match c.to_string().parse::<StrategyKind>() {
                Ok(strategy) => {
                    if let Err(e) = self.session.configure(Setup::new(mark, strategy)) {
                        warn!(error = %e, "Setup rejected");
                        self.status = e.to_string();
                    }
                }
                Err(e) => self.status = format!("{}. {}", e, strategy_prompt()),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        let target = match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.cursor.to_index(),
            KeyCode::Char('r') => {
                if matches!(self.session.phase(), Phase::RoundOver(_)) {
                    self.timer_commands.push(TimerCommand::Cancel);
                    self.fire(Deferred::NextRound);
                }
                return;
            }
            KeyCode::Char(c) => match digit_to_index(c) {
                Some(index) => index,
                None => return,
            },
            _ => return,
        };

        match self.session.play_human(target) {
            Ok(record) => {
                if let Some(position) = Position::from_index(record.index) {
                    self.cursor = position;
                }
            }
            Err(MoveError::NotHumanTurn) => {
                self.status = "Wait for your turn".to_string();
            }
            Err(e) => {
                self.status = format!("{}. Try another square.", e);
            }
        }
    }

    /// Applies pending session events to the view state.
    fn sync(&mut self) {
        let setup = self.session.setup();
        for event in self.session.drain_events() {
            debug!(?event, "Handling session event");
            match event {
                SessionEvent::SetupRequired => {
                    self.form = SetupForm::default();
                    self.last_computer_move = None;
                    self.timer_commands.push(TimerCommand::Cancel);
                    self.status = "Do you want to be X or O?".to_string();
                }
                SessionEvent::RoundStarted { .. } => {
                    self.last_computer_move = None;
                    self.cursor = Position::Center;
                }
                SessionEvent::MovePlayed { index, mark } => {
                    if setup.is_some_and(|s| s.computer() == mark) {
                        self.last_computer_move = Some(index);
                    }
                }
                SessionEvent::TurnChanged(Phase::HumanTurn) => {
                    self.status = "Your turn!".to_string();
                }
                SessionEvent::TurnChanged(Phase::ComputerTurn) => {
                    self.status = "AI's turn".to_string();
                    self.timer_commands
                        .push(TimerCommand::Start(Deferred::ComputerMove));
                }
                SessionEvent::TurnChanged(_) => {}
                SessionEvent::RoundOver { result, .. } => {
                    self.status = round_over_message(result, setup.map(|s| s.human));
                    self.timer_commands.push(TimerCommand::Start(Deferred::NextRound));
                }
            }
        }
    }
}

fn strategy_prompt() -> String {
    format!(
        "Play against ({}) {} or ({}) {}?",
        StrategyKind::Minimax.menu_key(),
        StrategyKind::Minimax.label(),
        StrategyKind::Random.menu_key(),
        StrategyKind::Random.label()
    )
}

fn round_over_message(result: GameResult, human: Option<Mark>) -> String {
    match result {
        GameResult::Won(mark) if Some(mark) == human => "You win!".to_string(),
        GameResult::Won(_) => "AI wins!".to_string(),
        GameResult::Draw => "It's a tie!".to_string(),
        GameResult::InProgress => String::new(),
    }
}
