//! Line-oriented game loop.

use crate::render::{render_board, render_scores, status_line};
use crate::session::{GameSession, TurnOutcome};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// Word commands accepted at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum Keyword {
    /// Start a new game.
    #[strum(to_string = "restart", serialize = "r")]
    Restart,
    /// Leave the program.
    #[strum(to_string = "exit", serialize = "quit", serialize = "q")]
    Exit,
    /// Show the command summary.
    #[strum(to_string = "help", serialize = "h", serialize = "?")]
    Help,
}

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based `row col`.
    Play {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// 1-based cell number, row-major.
    Cell(usize),
    /// A word command.
    Word(Keyword),
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok(Command::Play { row, col }),
                _ => Err(format!("Expected two numbers, got {:?}", s.trim())),
            },
            [word] => word
                .parse::<usize>()
                .map(Command::Cell)
                .or_else(|_| Keyword::from_str(word).map(Command::Word))
                .map_err(|_| format!("Unknown command {:?}", word)),
            _ => Err("Enter a move, 'restart', or 'exit'".to_string()),
        }
    }
}

impl Command {
    /// Converts a cell number to coordinates on a `size`×`size` board.
    pub fn cell_to_coords(cell: usize, size: usize) -> Option<(usize, usize)> {
        (1..=size * size)
            .contains(&cell)
            .then(|| ((cell - 1) / size, (cell - 1) % size))
    }
}

fn help_text(size: usize) -> String {
    let words: Vec<String> = Keyword::iter().map(|k| k.to_string()).collect();
    format!(
        "Moves: '<row> <col>' (0-{max}) or a cell number (1-{cells}). Commands: {}.",
        words.join(", "),
        max = size.saturating_sub(1),
        cells = size * size,
    )
}

/// Runs the game loop until `exit` or end of input.
///
/// Every accepted move prints the board and the status line. After a win or
/// tie the scores are shown and moves are refused until `restart`.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
    color: bool,
) -> io::Result<()> {
    let size = session.engine().board_size();
    writeln!(output, "{}", render_board(session.engine(), color))?;
    writeln!(output, "{}", status_line(session, color))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
        };
        debug!(?command, "Parsed command");

        let target = match command {
            Command::Word(Keyword::Exit) => {
                info!("Exit requested");
                return Ok(());
            }
            Command::Word(Keyword::Help) => {
                writeln!(output, "{}", help_text(size))?;
                None
            }
            Command::Word(Keyword::Restart) => {
                session.restart();
                writeln!(output, "{}", render_board(session.engine(), color))?;
                writeln!(output, "{}", status_line(session, color))?;
                None
            }
            Command::Play { row, col } => Some((row, col)),
            Command::Cell(cell) => match Command::cell_to_coords(cell, size) {
                Some(coords) => Some(coords),
                None => {
                    writeln!(output, "Cell must be between 1 and {}", size * size)?;
                    None
                }
            },
        };

        if let Some((row, col)) = target {
            match session.play(row, col) {
                Ok(outcome) => {
                    writeln!(output, "{}", render_board(session.engine(), color))?;
                    writeln!(output, "{}", status_line(session, color))?;
                    if !matches!(outcome, TurnOutcome::Continue { .. }) {
                        writeln!(output, "{}", render_scores(session))?;
                        writeln!(output, "Type 'restart' to play again or 'exit' to quit.")?;
                    }
                }
                Err(err) => writeln!(output, "{err}")?,
            }
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    info!("Input closed");
    Ok(())
}
