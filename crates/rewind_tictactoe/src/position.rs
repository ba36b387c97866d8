//! Row/column positions on an N×N board.

use super::types::BoardSize;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position on an N×N board, zero-based.
///
/// Positions do not carry the board size; conversions to and from the flat
/// row-major index take it as an argument and reject positions off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// The top-left corner.
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates position from a flat board index.
    #[instrument]
    pub fn from_index(index: usize, size: BoardSize) -> Option<Self> {
        if index >= size.cells() {
            return None;
        }
        let n = size.get();
        Some(Self {
            row: index / n,
            col: index % n,
        })
    }

    /// Converts position to a flat board index.
    #[instrument]
    pub fn to_index(self, size: BoardSize) -> Option<usize> {
        let n = size.get();
        (self.row < n && self.col < n).then(|| self.row * n + self.col)
    }

    /// Center of the board, rounded toward the top-left on even sizes.
    pub fn center(size: BoardSize) -> Self {
        let mid = (size.get() - 1) / 2;
        Self::new(mid, mid)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, col {}", self.row + 1, self.col + 1)
    }
}
