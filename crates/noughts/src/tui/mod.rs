//! Terminal presentation for a game session.

mod app;
mod input;
mod timer;
mod ui;

pub use app::{App, Control, Deferred, SetupForm, TimerCommand};
pub use input::{digit_to_index, move_cursor};
pub use timer::Timer;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_engine::{GameSession, RoundPolicy, Score};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Runs the terminal UI until the user quits, returning the final score.
#[instrument(skip(config))]
pub async fn run_tui(config: AppConfig, seed: Option<u64>) -> Result<Score> {
    info!("Starting Noughts TUI");

    let policy: RoundPolicy = *config.round_policy();
    let session = match seed {
        Some(seed) => GameSession::with_seed(policy, seed),
        None => GameSession::new(policy),
    };
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;

    let score = app.into_score();
    info!(%score, "Leaving Noughts TUI");
    Ok(score)
}

/// Draws, reads keys, and delivers elapsed timers until the app quits.
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = Timer::new(tx);

    loop {
        for command in app.take_timer_commands() {
            match command {
                TimerCommand::Start(deferred) => {
                    let delay = match deferred {
                        Deferred::ComputerMove => config.computer_delay(),
                        Deferred::NextRound => config.round_pause(),
                    };
                    timer.start(deferred, delay);
                }
                TimerCommand::Cancel => timer.cancel(),
            }
        }

        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && app.handle_key(key.code) == Control::Quit
        {
            timer.cancel();
            return Ok(());
        }

        while let Ok(deferred) = rx.try_recv() {
            app.fire(deferred);
        }
    }
}
