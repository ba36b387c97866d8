//! Core domain types for N×N tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player whose turn it is after `moves_played` moves.
    ///
    /// X moves on even counts, O on odd ones.
    pub fn for_ply(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Errors from constructing boards.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board side length was zero.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// Board side length is above [`BoardSize::MAX`].
    #[display("Board size {} is too large (max {})", _0, BoardSize::MAX)]
    TooLarge(#[error(not(source))] usize),

    /// Square count does not match `size * size`.
    #[display("Expected {} squares, got {}", expected, actual)]
    LengthMismatch {
        /// Squares required by the board size.
        expected: usize,
        /// Squares supplied.
        actual: usize,
    },
}

/// Side length of a square board.
///
/// Always in `1..=BoardSize::MAX`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Board size used when nothing else is configured.
    pub const DEFAULT: BoardSize = BoardSize(4);

    /// Largest accepted side length.
    pub const MAX: usize = 1024;

    /// Validates a side length.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if size > Self::MAX {
            return Err(BoardError::TooLarge(size));
        }
        Ok(Self(size))
    }

    /// Side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of squares on the board.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// One immutable N×N board snapshot.
///
/// Squares are stored in row-major order. Boards are never mutated in place;
/// placing a mark produces a new board with [`Board::with_mark`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    squares: Box<[Square]>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()].into_boxed_slice(),
        }
    }

    /// Builds a board from row-major squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Result<Self, BoardError> {
        if squares.len() != size.cells() {
            return Err(BoardError::LengthMismatch {
                expected: size.cells(),
                actual: squares.len(),
            });
        }
        Ok(Self {
            size,
            squares: squares.into_boxed_slice(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at a flat index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at a row/column position.
    pub fn at(&self, pos: Position) -> Option<Square> {
        pos.to_index(self.size).and_then(|index| self.get(index))
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is off the board or the square is already taken.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn with_mark(&self, index: usize, player: Player) -> Result<Self, MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfBounds {
                index,
                cells: self.size.cells(),
            }),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => {
                let mut squares = self.squares.clone();
                squares[index] = Square::Occupied(player);
                Ok(Self {
                    size: self.size,
                    squares,
                })
            }
        }
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares render as `.`.
    pub fn render(&self) -> String {
        let n = self.size.get();
        let separator = vec!["-"; n].join("+");
        self.squares
            .chunks(n)
            .map(|row| {
                row.iter()
                    .map(|s| s.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
