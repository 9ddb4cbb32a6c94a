//! Core domain types for the engine.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant in the game.
///
/// The color is opaque to the engine and only passed through for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Short unique identifier stamped onto played cells.
    label: String,
    /// Display color name.
    color: String,
}

impl Player {
    /// Creates a new player.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A `(row, col)` board coordinate, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl PartialEq<(usize, usize)> for Coord {
    fn eq(&self, other: &(usize, usize)) -> bool {
        self.row == other.0 && self.col == other.1
    }
}

/// A cell value: coordinates plus an optional player label.
///
/// A move with no label is the unplayed state of its cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    label: Option<String>,
}

impl Move {
    /// Creates an unplayed move at `(row, col)`.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            label: None,
        }
    }

    /// Creates a move carrying `label`.
    ///
    /// An empty string is the unplayed label, so `played(r, c, "")` equals
    /// `empty(r, c)`.
    #[instrument(skip(label))]
    pub fn played(row: usize, col: usize, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            row,
            col,
            label: (!label.is_empty()).then_some(label),
        }
    }

    /// Label carried by this move, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns true if the move carries no label.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }

    /// Coordinates of this move.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} -> ({}, {})", label, self.row, self.col),
            None => write!(f, "empty ({}, {})", self.row, self.col),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one empty cell.
    #[display("in progress")]
    InProgress,
    /// A winning combo has been recorded.
    #[display("won")]
    Won,
    /// Board full with no winner.
    #[display("tied")]
    Tied,
}

impl GameStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_with_empty_label_is_unplayed() {
        assert_eq!(Move::played(1, 2, ""), Move::empty(1, 2));
        assert!(Move::played(1, 2, "").is_empty());
    }

    #[test]
    fn test_played_keeps_label() {
        let mv = Move::played(0, 1, "X");
        assert_eq!(mv.label(), Some("X"));
        assert_eq!(mv.coord(), Coord::new(0, 1));
        assert_eq!(mv.to_string(), "X -> (0, 1)");
    }

    #[test]
    fn test_coord_compares_with_tuple() {
        assert_eq!(Coord::new(2, 0), (2, 0));
        assert_eq!(Coord::from((1, 1)).to_string(), "(1, 1)");
    }

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Tied.is_over());
    }
}
