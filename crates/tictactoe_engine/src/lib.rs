//! Tic-tac-toe game-state engine.
//!
//! The engine owns the board, validates moves, detects wins and ties through
//! precomputed winning lines, and rotates player turns. It knows nothing about
//! rendering or input; a UI collaborator drives it.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Move, Player};
//!
//! let players = vec![Player::new("X", "red"), Player::new("O", "blue")];
//! let mut engine = GameEngine::new(players, 3)?;
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     let mv = Move::played(row, col, engine.current_player().label().as_str());
//!     assert!(engine.is_valid_move(&mv)?);
//!     engine.process_move(mv)?;
//!     if engine.has_winner() || engine.is_tied() {
//!         break;
//!     }
//!     engine.toggle_player();
//! }
//!
//! assert!(engine.has_winner());
//! assert_eq!(engine.current_player().label(), "X");
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use board::Board;
pub use engine::{DEFAULT_BOARD_SIZE, GameEngine};
pub use error::{
    ConfigurationError, ConfigurationErrorKind, EngineError, OutOfBoundsError, ProtocolViolation,
};
pub use rules::{LineKind, WinningCombo};
pub use types::{Coord, GameStatus, Move, Player};
