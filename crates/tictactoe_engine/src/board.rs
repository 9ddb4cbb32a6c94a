//! Square game board.

use crate::error::OutOfBoundsError;
use crate::types::{Coord, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// N×N grid of [`Move`] cells in row-major order.
///
/// The move stored at `(r, c)` always has `row == r` and `col == c`; only its
/// label changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Move::empty(row, col)))
            .collect();
        Self { size, cells }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the move at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&Move, OutOfBoundsError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Stores `mv` at its own coordinates, replacing the previous cell.
    pub fn place(&mut self, mv: Move) -> Result<(), OutOfBoundsError> {
        let idx = self.index(mv.row, mv.col)?;
        self.cells[idx] = mv;
        Ok(())
    }

    /// Returns the label at `coord`, or `None` if the cell is empty or off the board.
    pub fn label_at(&self, coord: Coord) -> Option<&str> {
        self.get(coord.row, coord.col).ok().and_then(Move::label)
    }

    /// Checks if the cell at `(row, col)` is unplayed.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, OutOfBoundsError> {
        self.get(row, col).map(Move::is_empty)
    }

    /// Checks if every cell is played.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mv| !mv.is_empty())
    }

    /// Resets every cell to an unplayed move at its own coordinates.
    pub fn clear(&mut self) {
        for mv in &mut self.cells {
            *mv = Move::empty(mv.row, mv.col);
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show a dot.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = &self.cells[row * self.size + col];
                result.push_str(cell.label().unwrap_or("."));
                if col + 1 < self.size {
                    result.push('|');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, OutOfBoundsError> {
        if row >= self.size || col >= self.size {
            return Err(OutOfBoundsError {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_cells_carry_own_coordinates() {
        let board = Board::new(4);
        assert_eq!(board.cells().len(), 16);
        for row in 0..4 {
            for col in 0..4 {
                let mv = board.get(row, col).unwrap();
                assert_eq!((mv.row, mv.col), (row, col));
                assert!(mv.is_empty());
            }
        }
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(3);
        board.place(Move::played(2, 1, "O")).unwrap();
        assert_eq!(board.get(2, 1).unwrap().label(), Some("O"));
        assert_eq!(board.label_at(Coord::new(2, 1)), Some("O"));
        assert!(!board.is_empty(2, 1).unwrap());
        assert!(board.is_empty(0, 0).unwrap());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3);
        assert!(board.get(3, 0).is_err());
        assert!(board.get(0, 3).is_err());
        let err = board.place(Move::played(5, 5, "X")).unwrap_err();
        assert_eq!(err.size, 3);
        assert!(board.cells().iter().all(Move::is_empty));
    }

    #[test]
    fn test_full_and_clear() {
        let mut board = Board::new(2);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            board.place(Move::played(row, col, "X")).unwrap();
        }
        assert!(board.is_full());

        board.clear();
        assert!(!board.is_full());
        assert_eq!(board, Board::new(2));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.place(Move::played(0, 0, "X")).unwrap();
        board.place(Move::played(1, 1, "O")).unwrap();
        assert_eq!(board.display(), "X|.|.\n.|O|.\n.|.|.");
    }
}
