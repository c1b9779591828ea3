//! Stateless UI rendering for tic-tac-toe.

use noughts_engine::{Mark, Phase, Position, Square, StrategyKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board or setup
            Constraint::Length(1), // Score
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if app.session().phase() == Phase::AwaitingSetup {
        draw_setup(frame, chunks[1], app);
    } else {
        draw_board(frame, chunks[1], app);
    }

    let score = Paragraph::new(app.session().score().to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[2]);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(help_text(app.session().phase()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn help_text(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingSetup => "x/o: choose mark  1/2: choose AI  q: quit",
        Phase::RoundOver(_) => "r: next round  n: new game  q: quit",
        Phase::HumanTurn | Phase::ComputerTurn => {
            "arrows + enter or 1-9: move  n: new game  q: quit"
        }
    }
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let chosen = |selected: bool| {
        if selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };
    let mark = app.form().mark();

    let mut lines = vec![
        Line::from("Choose your mark:"),
        Line::from(vec![
            Span::styled("  [X]", chosen(mark == Some(Mark::X))),
            Span::raw("   "),
            Span::styled("[O]", chosen(mark == Some(Mark::O))),
        ]),
        Line::from(""),
    ];
    if mark.is_some() {
        lines.push(Line::from("Choose your opponent:"));
        for kind in [StrategyKind::Minimax, StrategyKind::Random] {
            lines.push(Line::from(format!("  ({}) {}", kind.menu_key(), kind.label())));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().title("New game").borders(Borders::ALL));
    frame.render_widget(paragraph, center_rect(area, 40, 9));
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let index = pos.to_index();
    let human = app.session().setup().map(|s| s.human);

    let (symbol, mut style) = match app.session().board().get(index) {
        Some(Square::Occupied(mark)) => {
            let color = if Some(mark) == human { Color::Green } else { Color::Red };
            let text = if mark == Mark::X { " X " } else { " O " };
            (text, Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
        _ => ("   ", Style::default().fg(Color::DarkGray)),
    };

    if app.winning_line().is_some_and(|line| line.contains(&index)) {
        style = style.add_modifier(Modifier::REVERSED);
    } else if app.last_computer_move() == Some(index) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if pos == app.cursor() && app.session().phase() == Phase::HumanTurn {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
