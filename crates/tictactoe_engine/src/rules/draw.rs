//! Tie detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells played).
///
/// A full board with no winner is a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::{find_winning_index, winning_combos};
    use super::*;
    use crate::types::Move;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && find_winning_index(board, &winning_combos(board.size())).is_none()
    }

    fn fill(rows: [&str; 3]) -> Board {
        let mut board = Board::new(3);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.place(Move::played(row, col, ch.to_string())).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.place(Move::played(1, 1, "X")).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let board = fill(["XOX", "OXX", "OXO"]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let board = fill(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
