//! The game-state engine.

use crate::board::Board;
use crate::error::{ConfigurationError, ConfigurationErrorKind, OutOfBoundsError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, WinningCombo};
use crate::types::{Coord, GameStatus, Move, Player};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Board size of the classic game.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Tic-tac-toe game engine.
///
/// Tracks the board, validates moves, detects wins and ties, and rotates
/// turns. The caller drives it with a fixed protocol per interaction:
///
/// 1. [`is_valid_move`](Self::is_valid_move) with the current player's label stamped on the move
/// 2. [`process_move`](Self::process_move) if valid
/// 3. [`has_winner`](Self::has_winner) / [`is_tied`](Self::is_tied)
/// 4. [`toggle_player`](Self::toggle_player) if neither
///
/// The engine never advances the turn on its own, and it does not check that
/// a move's label belongs to the current player. Use
/// [`MoveContract`](crate::contracts::MoveContract) for stricter checking.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Vec<Player>,
    current: usize,
    board: Board,
    combos: Vec<WinningCombo>,
    winner: Option<usize>,
}

impl GameEngine {
    /// Creates an engine for `players` (in turn order) on a `board_size`×`board_size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if there are fewer than two players, a
    /// label is empty or repeated, or `board_size` is zero.
    #[track_caller]
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, ConfigurationError> {
        if players.len() < 2 {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::TooFewPlayers(players.len()),
            ));
        }

        let mut seen = HashSet::new();
        for player in &players {
            if player.label().is_empty() {
                return Err(ConfigurationError::new(ConfigurationErrorKind::EmptyLabel));
            }
            if !seen.insert(player.label().as_str()) {
                return Err(ConfigurationError::new(
                    ConfigurationErrorKind::DuplicateLabel(player.label().clone()),
                ));
            }
        }

        if board_size < 1 {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::InvalidBoardSize(board_size),
            ));
        }

        info!(board_size, "Creating game engine");
        Ok(Self {
            players,
            current: 0,
            board: Board::new(board_size),
            combos: rules::winning_combos(board_size),
            winner: None,
        })
    }

    /// Creates the classic game: `X` (blue) against `O` (green) on a 3×3 board.
    #[instrument]
    pub fn standard() -> Self {
        let players = vec![Player::new("X", "blue"), Player::new("O", "green")];
        Self {
            players,
            current: 0,
            board: Board::new(DEFAULT_BOARD_SIZE),
            combos: rules::winning_combos(DEFAULT_BOARD_SIZE),
            winner: None,
        }
    }

    /// Checks whether `mv` may be played.
    ///
    /// True iff no winner has been declared and the target cell is empty.
    /// The move's label is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if the move is off the board.
    #[instrument(skip(self), fields(row = mv.row, col = mv.col))]
    pub fn is_valid_move(&self, mv: &Move) -> Result<bool, OutOfBoundsError> {
        let empty = self.board.is_empty(mv.row, mv.col)?;
        Ok(self.winner.is_none() && empty)
    }

    /// Writes `mv` into the board and records the first winning combo, if any.
    ///
    /// The caller must have checked [`is_valid_move`](Self::is_valid_move);
    /// this method does not re-validate and will overwrite an occupied cell.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if the move is off the board. Nothing is
    /// mutated in that case.
    #[instrument(skip(self), fields(row = mv.row, col = mv.col, label = ?mv.label()))]
    pub fn process_move(&mut self, mv: Move) -> Result<(), OutOfBoundsError> {
        self.board.place(mv)?;
        debug!(board = %self.board.display(), "Move applied");

        if let Some(idx) = rules::find_winning_index(&self.board, &self.combos) {
            info!(line = %self.combos[idx].kind(), "Winning combo found");
            self.winner = Some(idx);
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after move"
        );
        Ok(())
    }

    /// Returns true once a winning combo has been recorded.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns true if there is no winner and every cell is played.
    pub fn is_tied(&self) -> bool {
        self.winner.is_none() && rules::is_full(&self.board)
    }

    /// Advances the turn to the next player, wrapping after the last.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(current = %self.players[self.current], "Turn passed");
    }

    /// Clears the board and the winner. The current player is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.winner = None;
        info!(current = %self.players[self.current], "Board reset");

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after reset"
        );
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index of the current player in [`players`](Self::players).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The recorded winning line, if any.
    pub fn winner_combo(&self) -> Option<&WinningCombo> {
        self.winner.map(|idx| &self.combos[idx])
    }

    /// The player whose label fills the winning line, if any.
    pub fn winner(&self) -> Option<&Player> {
        let combo = self.winner_combo()?;
        let label = self.board.label_at(*combo.coords().first()?)?;
        self.player_by_label(label)
    }

    /// Looks up a configured player by label.
    pub fn player_by_label(&self, label: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.label() == label)
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// All winning lines, in evaluation order.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.combos
    }

    /// Returns the move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if the coordinates are off the board.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Move, OutOfBoundsError> {
        self.board.get(row, col)
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Coordinates of every empty cell in row-major order.
    ///
    /// Empty once a winner is recorded.
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.has_winner() {
            return Vec::new();
        }
        self.board
            .cells()
            .iter()
            .filter(|mv| mv.is_empty())
            .map(Move::coord)
            .collect()
    }

    pub(crate) fn recorded_winner_index(&self) -> Option<usize> {
        self.winner
    }
}
