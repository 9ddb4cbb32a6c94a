//! Win detection.

use super::lines::WinningCombo;
use crate::board::Board;
use std::collections::HashSet;
use tracing::instrument;

/// Checks whether a single combo is uniformly labeled with a non-empty label.
///
/// Collects the distinct labels on the line; the line wins iff there is
/// exactly one and it is not the empty label.
pub fn is_winning(board: &Board, combo: &WinningCombo) -> bool {
    let labels: HashSet<Option<&str>> = combo
        .coords()
        .iter()
        .map(|&coord| board.label_at(coord))
        .collect();
    labels.len() == 1 && !labels.contains(&None)
}

/// Returns the index of the first winning combo in enumeration order, if any.
#[instrument(skip(board, combos), fields(combos = combos.len()))]
pub fn find_winning_index(board: &Board, combos: &[WinningCombo]) -> Option<usize> {
    combos.iter().position(|combo| is_winning(board, combo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::lines::{LineKind, winning_combos};
    use crate::types::Move;

    fn board_with(size: usize, moves: &[(usize, usize, &str)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, label) in moves {
            board.place(Move::played(row, col, label)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(find_winning_index(&board, &winning_combos(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, 0, "X"), (0, 1, "X"), (0, 2, "X")]);
        let combos = winning_combos(3);
        let idx = find_winning_index(&board, &combos).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(combos[idx].kind(), LineKind::Row(0));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(3, &[(0, 2, "O"), (1, 1, "O"), (2, 0, "O")]);
        let combos = winning_combos(3);
        let idx = find_winning_index(&board, &combos).unwrap();
        assert_eq!(idx, combos.len() - 1);
        assert_eq!(combos[idx].kind(), LineKind::AntiDiagonal);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(3, &[(0, 0, "X"), (0, 1, "O"), (0, 2, "X")]);
        let combos = winning_combos(3);
        assert!(!is_winning(&board, &combos[0]));
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let board = board_with(3, &[(0, 0, "X"), (0, 1, "X")]);
        let combos = winning_combos(3);
        assert!(!is_winning(&board, &combos[0]));
    }

    #[test]
    fn test_first_match_wins() {
        // Row 0 and column 0 both complete; rows are enumerated first.
        let board = board_with(
            3,
            &[
                (0, 0, "X"),
                (0, 1, "X"),
                (0, 2, "X"),
                (1, 0, "X"),
                (2, 0, "X"),
            ],
        );
        let combos = winning_combos(3);
        let idx = find_winning_index(&board, &combos).unwrap();
        assert_eq!(combos[idx].kind(), LineKind::Row(0));
    }
}
