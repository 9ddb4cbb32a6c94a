//! Contract-based move validation.
//!
//! The engine trusts its caller: `process_move` does not re-validate and
//! `is_valid_move` ignores the move's label. These checks let a caller detect
//! protocol misuse before touching the engine.

use crate::GameEngine;
use crate::error::ProtocolViolation;
use crate::types::Move;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no winner has been declared.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the game is won.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), ProtocolViolation> {
        if engine.has_winner() {
            warn!("Move attempted after game over");
            Err(ProtocolViolation::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto played or off-board cells.
    #[instrument(skip(engine))]
    pub fn check(mv: &Move, engine: &GameEngine) -> Result<(), ProtocolViolation> {
        let cell = engine.cell(mv.row, mv.col)?;
        match cell.label() {
            None => Ok(()),
            Some(label) => Err(ProtocolViolation::CellOccupied {
                row: mv.row,
                col: mv.col,
                label: label.to_string(),
            }),
        }
    }
}

/// Precondition: the move carries the label of a configured player.
pub struct KnownLabel;

impl KnownLabel {
    /// Rejects unlabeled moves and labels no player owns.
    #[instrument(skip(engine))]
    pub fn check(mv: &Move, engine: &GameEngine) -> Result<(), ProtocolViolation> {
        let label = mv.label().unwrap_or_default();
        if engine.player_by_label(label).is_some() {
            Ok(())
        } else {
            Err(ProtocolViolation::UnknownLabel(label.to_string()))
        }
    }
}

/// Precondition: the move's label is the current player's.
///
/// Not part of [`MoveContract`]; callers opt into it.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves stamped with another player's label.
    #[instrument(skip(engine))]
    pub fn check(mv: &Move, engine: &GameEngine) -> Result<(), ProtocolViolation> {
        let expected = engine.current_player().label();
        let got = mv.label().unwrap_or_default();
        if got == expected {
            Ok(())
        } else {
            Err(ProtocolViolation::WrongPlayer {
                expected: expected.clone(),
                got: got.to_string(),
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Composite precondition for submitting a move.
///
/// Checks, in order: game not over, cell in bounds and empty, label owned by
/// a configured player. A move that passes is one for which
/// [`GameEngine::is_valid_move`] returns `Ok(true)`.
pub struct MoveContract;

impl MoveContract {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine), fields(row = mv.row, col = mv.col))]
    pub fn pre(engine: &GameEngine, mv: &Move) -> Result<(), ProtocolViolation> {
        GameNotOver::check(engine)?;
        CellIsEmpty::check(mv, engine)?;
        KnownLabel::check(mv, engine)?;
        Ok(())
    }

    /// Validates the contract plus [`PlayersTurn`].
    #[instrument(skip(engine), fields(row = mv.row, col = mv.col))]
    pub fn pre_strict(engine: &GameEngine, mv: &Move) -> Result<(), ProtocolViolation> {
        Self::pre(engine, mv)?;
        PlayersTurn::check(mv, engine)
    }
}
