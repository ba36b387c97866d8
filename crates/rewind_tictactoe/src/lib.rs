//! N×N tic-tac-toe with a rewindable move history.
//!
//! A [`Game`] keeps every board snapshot played so far on a [`Timeline`] and
//! a pointer to the snapshot being viewed. Jumping to an earlier snapshot is
//! free; playing from it discards the snapshots that came after.
//!
//! ```
//! use rewind_tictactoe::{BoardSize, Game, Player, Status};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(BoardSize::new(3)?);
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.current_view().status(), Status::Winner(Player::X));
//!
//! game.jump_to(1)?;
//! game.apply_move(8)?;
//! assert_eq!(game.len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod timeline;
mod types;

pub use action::{Move, MoveError, ReplayError};
pub use contracts::{
    Contract, InBounds, LegalMove, MoveContract, NoWinnerYet, PointerInBounds, SquareIsEmpty,
};
pub use game::{Game, Status, View};
pub use invariants::{
    AlternatingMarksInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleCellDeltaInvariant, TimelineInvariants, UniformSizeInvariant,
};
pub use position::Position;
pub use rules::check_winner;
pub use timeline::{MoveEntry, Snapshot, Timeline};
pub use types::{Board, BoardError, BoardSize, Player, Square};
