//! Cell coordinates invariant: every cell sits at its own position.

use super::Invariant;
use crate::GameEngine;

/// Invariant: the move stored at `(r, c)` has `row == r` and `col == c`.
pub struct CellCoordinatesInvariant;

impl Invariant<GameEngine> for CellCoordinatesInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let size = engine.board_size();
        engine.board().cells().len() == size * size
            && engine
                .board()
                .cells()
                .iter()
                .enumerate()
                .all(|(idx, mv)| mv.row == idx / size && mv.col == idx % size)
    }

    fn description() -> &'static str {
        "Every cell holds a move with its own coordinates"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_new_engine_holds() {
        let players = vec![Player::new("A", "red"), Player::new("B", "blue")];
        let engine = GameEngine::new(players, 5).unwrap();
        assert!(CellCoordinatesInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::standard();
        engine.process_move(Move::played(2, 1, "X")).unwrap();
        engine.process_move(Move::played(0, 2, "O")).unwrap();
        assert!(CellCoordinatesInvariant::holds(&engine));
    }
}
