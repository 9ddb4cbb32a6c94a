//! Game session: drives the engine's move protocol for one player seat at a time.

use derive_getters::Getters;
use derive_more::{Display, From};
use std::collections::BTreeMap;
use tictactoe_engine::contracts::MoveContract;
use tictactoe_engine::{GameEngine, GameStatus, Move, Player, ProtocolViolation, WinningCombo};
use tracing::{debug, info, instrument, warn};

/// What happened after a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Game continues; `next` is now to move.
    Continue {
        /// Player whose turn it is now.
        next: Player,
    },
    /// The move completed a winning line.
    Won {
        /// Player who made the winning move.
        winner: Player,
        /// The completed line.
        combo: WinningCombo,
    },
    /// The move filled the board without a winner.
    Tied,
}

/// A move the session refused. The engine is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The move broke the protocol.
    #[display("Move rejected: {_0}")]
    Rejected(ProtocolViolation),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Rejected(e) => Some(e),
        }
    }
}

/// Wins per player label and ties, across restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    wins: BTreeMap<String, u32>,
    ties: u32,
}

impl Scoreboard {
    /// Wins recorded for `label`.
    pub fn wins_for(&self, label: &str) -> u32 {
        self.wins.get(label).copied().unwrap_or(0)
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.ties
    }

    fn record_win(&mut self, label: &str) {
        *self.wins.entry(label.to_string()).or_default() += 1;
    }

    fn record_tie(&mut self) {
        self.ties += 1;
    }
}

/// A series of games on one engine.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    engine: GameEngine,
    scoreboard: Scoreboard,
    moves_played: usize,
}

impl GameSession {
    /// Creates a new session around `engine`.
    #[instrument(skip(engine), fields(board_size = engine.board_size()))]
    pub fn new(engine: GameEngine) -> Self {
        info!(players = engine.players().len(), "Creating game session");
        Self {
            engine,
            scoreboard: Scoreboard::default(),
            moves_played: 0,
        }
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Runs the full protocol: validate, process, check win and tie, and
    /// pass the turn if the game goes on.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the cell is off the board or taken, or
    /// the game is already over.
    #[instrument(skip(self), fields(player = %self.engine.current_player()))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnOutcome, SessionError> {
        let player = self.engine.current_player().clone();
        let mv = Move::played(row, col, player.label().as_str());

        let valid = self
            .engine
            .is_valid_move(&mv)
            .map_err(ProtocolViolation::from)?;
        if !valid {
            return Err(self.rejection(&mv).into());
        }
        MoveContract::pre_strict(&self.engine, &mv)?;

        self.engine
            .process_move(mv)
            .map_err(ProtocolViolation::from)?;
        self.moves_played += 1;

        if self.engine.has_winner() {
            let combo = self
                .engine
                .winner_combo()
                .cloned()
                .ok_or(ProtocolViolation::GameOver)?;
            info!(winner = %player, line = %combo.kind(), "Game won");
            self.scoreboard.record_win(player.label());
            return Ok(TurnOutcome::Won {
                winner: player,
                combo,
            });
        }

        if self.engine.is_tied() {
            info!("Game tied");
            self.scoreboard.record_tie();
            return Ok(TurnOutcome::Tied);
        }

        self.engine.toggle_player();
        let next = self.engine.current_player().clone();
        debug!(next = %next, "Turn passed");
        Ok(TurnOutcome::Continue { next })
    }

    /// Starts a new game. Whoever was to move keeps the turn.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.reset();
        self.moves_played = 0;
        info!(first = %self.engine.current_player(), "New game");
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    fn rejection(&self, mv: &Move) -> ProtocolViolation {
        let violation = match MoveContract::pre(&self.engine, mv) {
            Err(violation) => violation,
            Ok(()) => ProtocolViolation::GameOver,
        };
        warn!(%violation, "Move rejected");
        violation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_passes_turn() {
        let mut session = GameSession::new(GameEngine::standard());
        let outcome = session.play(1, 1).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Continue {
                next: Player::new("O", "green")
            }
        );
        assert_eq!(*session.moves_played(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = GameSession::new(GameEngine::standard());
        session.play(1, 1).unwrap();
        let err = session.play(1, 1).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Rejected(ProtocolViolation::CellOccupied { .. })
        ));
        assert_eq!(session.engine().current_player().label(), "O");
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut session = GameSession::new(GameEngine::standard());
        let err = session.play(3, 3).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Rejected(ProtocolViolation::OutOfBounds(_))
        ));
        assert_eq!(*session.moves_played(), 0);
    }

    #[test]
    fn test_scoreboard_counts() {
        let mut board = Scoreboard::default();
        board.record_win("X");
        board.record_win("X");
        board.record_tie();
        assert_eq!(board.wins_for("X"), 2);
        assert_eq!(board.wins_for("O"), 0);
        assert_eq!(board.games(), 3);
    }
}
