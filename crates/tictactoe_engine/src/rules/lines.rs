//! Winning-line geometry.

use crate::types::Coord;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which line of the board a combo covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LineKind {
    /// A full row.
    #[display("row {_0}")]
    Row(usize),
    /// A full column.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// One candidate winning line: N coordinates plus the line it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct WinningCombo {
    kind: LineKind,
    coords: Vec<Coord>,
}

impl WinningCombo {
    /// The line this combo covers.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Coordinates of the line, in ascending row order (column order for rows).
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Checks whether `coord` lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}

impl std::fmt::Display for WinningCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.kind)?;
        for coord in &self.coords {
            write!(f, " {}", coord)?;
        }
        Ok(())
    }
}

/// Builds every winning line of a `size`×`size` board.
///
/// Order: rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal. Always `2 * size + 2` combos.
#[instrument]
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let rows = (0..size).map(|row| {
        WinningCombo::new(
            LineKind::Row(row),
            (0..size).map(|col| Coord::new(row, col)).collect(),
        )
    });
    let columns = (0..size).map(|col| {
        WinningCombo::new(
            LineKind::Column(col),
            (0..size).map(|row| Coord::new(row, col)).collect(),
        )
    });
    let main = WinningCombo::new(
        LineKind::MainDiagonal,
        (0..size).map(|i| Coord::new(i, i)).collect(),
    );
    let anti = WinningCombo::new(
        LineKind::AntiDiagonal,
        (0..size).map(|i| Coord::new(i, size - 1 - i)).collect(),
    );

    let combos: Vec<_> = rows.chain(columns).chain([main, anti]).collect();
    debug!(count = combos.len(), "Built winning combos");
    combos
}
