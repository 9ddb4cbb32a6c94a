//! Error types for the game engine.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Reason a [`GameEngine`](crate::GameEngine) could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationErrorKind {
    /// Fewer than two players were supplied.
    #[display("at least 2 players are required, got {_0}")]
    TooFewPlayers(usize),

    /// Two players share the same label.
    #[display("duplicate player label {_0:?}")]
    DuplicateLabel(String),

    /// A player has an empty label, which is reserved for unplayed cells.
    #[display("player label must not be empty")]
    EmptyLabel,

    /// Board size is not a positive integer.
    #[display("board size must be at least 1, got {_0}")]
    InvalidBoardSize(usize),
}

/// Invalid construction arguments, with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration error: {} at {}:{}", kind, file, line)]
pub struct ConfigurationError {
    /// What was wrong with the arguments.
    pub kind: ConfigurationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A query or move referenced coordinates outside `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("({row}, {col}) is outside the {size}x{size} board")]
pub struct OutOfBoundsError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Board size.
    pub size: usize,
}

/// Misuse of the move protocol detected by [`MoveContract`](crate::contracts::MoveContract).
///
/// The engine itself never produces these; they exist for callers that want
/// stricter checking than the engine's documented contract.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ProtocolViolation {
    /// A winner has already been declared.
    #[display("game is already over")]
    GameOver,

    /// The target cell already holds a label.
    #[display("cell ({row}, {col}) is already taken by {label:?}")]
    CellOccupied {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Label already in the cell.
        label: String,
    },

    /// The move carries no label or one no configured player owns.
    #[display("label {_0:?} does not belong to any player")]
    UnknownLabel(String),

    /// The move's label is not the current player's.
    #[display("it is {expected:?}'s turn, not {got:?}'s")]
    WrongPlayer {
        /// Label of the current player.
        expected: String,
        /// Label carried by the move.
        got: String,
    },

    /// The move lies outside the board.
    #[display("{_0}")]
    OutOfBounds(OutOfBoundsError),
}

impl std::error::Error for ProtocolViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolViolation::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OutOfBoundsError> for ProtocolViolation {
    fn from(err: OutOfBoundsError) -> Self {
        ProtocolViolation::OutOfBounds(err)
    }
}

/// Any error the engine crate can report.
#[derive(Debug, Clone, Display, From)]
pub enum EngineError {
    /// Construction failed.
    #[display("{_0}")]
    Configuration(ConfigurationError),
    /// Coordinates out of range.
    #[display("{_0}")]
    OutOfBounds(OutOfBoundsError),
    /// Protocol misuse.
    #[display("{_0}")]
    Protocol(ProtocolViolation),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Configuration(e) => Some(e),
            EngineError::OutOfBounds(e) => Some(e),
            EngineError::Protocol(e) => Some(e),
        }
    }
}
