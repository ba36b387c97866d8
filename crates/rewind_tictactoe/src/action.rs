//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each snapshot after the first
//! records the move that produced it, so history entries can say what
//! happened and invariants can check it.

use super::Player;
use super::position::Position;
use super::types::BoardSize;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a flat board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the square that was marked.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the square index of this move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the row/column of this move on a board of `size`.
    pub fn position(&self, size: BoardSize) -> Option<Position> {
        Position::from_index(self.index, size)
    }

    /// Human-readable description, e.g. `X at row 1, col 3`.
    pub fn describe(&self, size: BoardSize) -> String {
        match self.position(size) {
            Some(pos) => format!("{} at {}", self.player, pos),
            None => format!("{} at #{}", self.player, self.index),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Why a move or a jump was rejected.
///
/// A rejected operation never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// The viewed snapshot already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),

    /// The index is off the board.
    #[display("Square {} is out of bounds (board has {} squares)", index, cells)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Squares on the board.
        cells: usize,
    },

    /// The requested history entry does not exist.
    #[display("No snapshot #{} (history has {} entries)", index, len)]
    NoSuchSnapshot {
        /// Requested snapshot index.
        index: usize,
        /// Snapshots in the history.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// A move in a replayed sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move #{} (square {}) rejected", number, index)]
pub struct ReplayError {
    /// One-based position of the move in the sequence.
    pub number: usize,
    /// Square the move tried to mark.
    pub index: usize,
    /// Why the game rejected it.
    pub source: MoveError,
}
