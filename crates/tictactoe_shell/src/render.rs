//! Plain-text board and status rendering.

use crate::session::GameSession;
use crossterm::style::{Color, Stylize};
use tictactoe_engine::{Coord, GameEngine, GameStatus, Player};

/// Paints `text` in the player's color when `color` is on.
///
/// Unknown color names leave the text unstyled.
pub fn paint(text: &str, player: &Player, color: bool) -> String {
    match Color::try_from(player.color().as_str()) {
        Ok(c) if color => text.to_string().with(c).bold().to_string(),
        _ => text.to_string(),
    }
}

/// Renders the board as a text grid.
///
/// Empty cells show their 1-based cell number in row-major order. Cells on
/// the winning line are wrapped in brackets.
pub fn render_board(engine: &GameEngine, color: bool) -> String {
    let size = engine.board_size();
    let width = engine
        .players()
        .iter()
        .map(|p| p.label().chars().count())
        .chain(std::iter::once((size * size).to_string().len()))
        .max()
        .unwrap_or(1);
    let winning = engine.winner_combo();

    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        let mut cells = Vec::with_capacity(size);
        for col in 0..size {
            let on_line = winning.is_some_and(|combo| combo.contains(Coord::new(row, col)));
            let (open, close) = if on_line { ('[', ']') } else { (' ', ' ') };

            let text = match engine.cell(row, col).ok().and_then(|mv| mv.label()) {
                Some(label) => {
                    let padded = format!("{:^width$}", label);
                    match engine.player_by_label(label) {
                        Some(player) => paint(&padded, player, color),
                        None => padded,
                    }
                }
                None => format!("{:^width$}", row * size + col + 1),
            };
            cells.push(format!("{open}{text}{close}"));
        }
        lines.push(cells.join("|"));
        if row + 1 < size {
            lines.push(vec!["-".repeat(width + 2); size].join("+"));
        }
    }
    lines.join("\n")
}

/// One-line game status shown above the board.
pub fn status_line(session: &GameSession, color: bool) -> String {
    let engine = session.engine();
    let current = engine.current_player();
    match session.status() {
        GameStatus::Won => {
            let winner = engine.winner().unwrap_or(current);
            let label = paint(winner.label(), winner, color);
            format!("Player \"{label}\" won!")
        }
        GameStatus::Tied => "Tied game!".to_string(),
        GameStatus::InProgress if *session.moves_played() == 0 => "Ready".to_string(),
        GameStatus::InProgress => format!("{}'s turn", paint(current.label(), current, color)),
    }
}

/// Scores so far, e.g. `X: 2  O: 1  ties: 0`.
pub fn render_scores(session: &GameSession) -> String {
    let scores = session.scoreboard();
    let mut parts: Vec<String> = session
        .engine()
        .players()
        .iter()
        .map(|p| format!("{}: {}", p.label(), scores.wins_for(p.label())))
        .collect();
    parts.push(format!("ties: {}", scores.ties()));
    parts.join("  ")
}
