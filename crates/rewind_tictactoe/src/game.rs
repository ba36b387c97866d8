//! Game state: a timeline of snapshots plus the pointer being viewed.

use super::action::{Move, MoveError, ReplayError};
use super::contracts::{Contract, MoveContract};
use super::timeline::{Snapshot, Timeline};
use super::types::{Board, BoardSize, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What the status line shows for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No line yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Everything needed to render the viewed snapshot.
///
/// Derived from the pointer on every call to [`Game::current_view`]; never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a> {
    /// Board at the pointer.
    pub board: &'a Board,
    /// Player whose mark the next move places.
    pub to_move: Player,
    /// Winner on this board, if any.
    pub winner: Option<Player>,
}

impl View<'_> {
    /// Status line for this view.
    pub fn status(&self) -> Status {
        match self.winner {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.to_move),
        }
    }

    /// Returns true if moves are still accepted from this view.
    pub fn is_open(&self) -> bool {
        self.winner.is_none()
    }
}

/// Tic-tac-toe game with time travel.
///
/// Holds every snapshot played so far and a pointer to the one being viewed.
/// The player to move is derived from the pointer: X on even snapshots, O on
/// odd ones. Jumping only moves the pointer; playing from an earlier snapshot
/// discards the snapshots after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) timeline: Timeline,
    pointer: usize,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            timeline: Timeline::new(size),
            pointer: 0,
        }
    }

    /// Builds a game by playing cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move, numbered from 1.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: BoardSize, moves: &[usize]) -> Result<Self, ReplayError> {
        let mut game = Self::new(size);
        for (n, &index) in moves.iter().enumerate() {
            game.apply_move(index).map_err(|source| ReplayError {
                number: n + 1,
                index,
                source,
            })?;
        }
        Ok(game)
    }

    /// Board size for this game.
    pub fn size(&self) -> BoardSize {
        self.timeline.size()
    }

    /// Index of the viewed snapshot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of snapshots in the history.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Returns true if the history holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Full history.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns true when the pointer is on the latest snapshot.
    pub fn at_latest(&self) -> bool {
        self.pointer + 1 == self.timeline.len()
    }

    /// Player whose mark the next move from the viewed snapshot places.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.pointer)
    }

    /// The viewed snapshot.
    pub fn current(&self) -> &Snapshot {
        // The pointer is kept in bounds by `apply_move` and `jump_to`.
        &self.timeline.snapshots()[self.pointer]
    }

    /// Board, player to move, and winner for the viewed snapshot.
    pub fn current_view(&self) -> View<'_> {
        let snapshot = self.current();
        View {
            board: snapshot.board(),
            to_move: self.to_move(),
            winner: *snapshot.winner(),
        }
    }

    /// Places the active player's mark at `index`.
    ///
    /// Snapshots after the pointer are discarded, the new board is appended,
    /// and the pointer moves to it. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed snapshot has a winner
    /// - [`MoveError::OutOfBounds`] if `index` is off the board
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(pointer = self.pointer, len = self.timeline.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        MoveContract::pre(self, &index)?;

        let player = self.to_move();
        let board = self.current().board().with_mark(index, player)?;
        let action = Move::new(player, index);
        let snapshot = Snapshot::new(board, Some(action));

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.pointer = self.timeline.branch(self.pointer, snapshot);

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        if let Some(winner) = self.current().winner() {
            info!(%winner, moves = self.pointer, "Line completed");
        }
        debug!(%action, pointer = self.pointer, "Move applied");
        Ok(action)
    }

    /// Moves the pointer to snapshot `index` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSuchSnapshot`] if `index` is past the end.
    #[instrument(skip(self), fields(len = self.timeline.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        let len = self.timeline.len();
        if index >= len {
            return Err(MoveError::NoSuchSnapshot { index, len });
        }
        debug!(from = self.pointer, to = index, "Jumping");
        self.pointer = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).expect("valid size")
    }

    #[test]
    fn test_new_game_view() {
        let game = Game::new(size(4));
        let view = game.current_view();
        assert_eq!(view.board.occupied(), 0);
        assert_eq!(view.to_move, Player::X);
        assert_eq!(view.winner, None);
        assert_eq!(view.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut game = Game::new(size(3));
        assert_eq!(game.apply_move(4), Ok(Move::new(Player::X, 4)));
        assert_eq!(game.apply_move(0), Ok(Move::new(Player::O, 0)));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.len(), 3);
        assert_eq!(game.pointer(), 2);
    }

    #[test]
    fn test_winner_status() {
        let game = Game::replay(size(3), &[0, 4, 1, 5, 2]).expect("legal moves");
        assert_eq!(game.current_view().status(), Status::Winner(Player::X));
        assert_eq!(game.current_view().status().to_string(), "Winner: X");
        assert!(!game.current_view().is_open());
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::replay(size(3), &[4]).expect("legal move");
        let before = game.clone();
        assert_eq!(game.apply_move(4), Err(MoveError::SquareOccupied(4)));
        assert_eq!(game.apply_move(42), Err(MoveError::OutOfBounds { index: 42, cells: 9 }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_past_end_rejected() {
        let mut game = Game::replay(size(3), &[4, 0]).expect("legal moves");
        assert_eq!(
            game.jump_to(3),
            Err(MoveError::NoSuchSnapshot { index: 3, len: 3 })
        );
        assert_eq!(game.pointer(), 2);
    }

    #[test]
    fn test_jump_changes_view_and_turn() {
        let mut game = Game::replay(size(3), &[4, 0, 8]).expect("legal moves");
        game.jump_to(1).expect("existing snapshot");
        assert_eq!(game.len(), 4);
        assert!(!game.at_latest());
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.current_view().board.occupied(), 1);
    }

    #[test]
    fn test_viewing_past_of_won_game_allows_moves() {
        let mut game = Game::replay(size(3), &[0, 4, 1, 5, 2]).expect("legal moves");
        game.jump_to(4).expect("existing snapshot");
        assert!(game.current_view().is_open());
        assert_eq!(game.apply_move(8), Ok(Move::new(Player::X, 8)));
        assert_eq!(game.len(), 6);
        assert_eq!(*game.current().winner(), None);
        assert_eq!(game.current_view().status(), Status::NextPlayer(Player::O));
    }
}
