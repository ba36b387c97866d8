//! Win detection logic for N×N tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// A player wins with a full line of `size` marks. Lines are checked in a
/// fixed order: rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal. The first complete line decides.
///
/// Returns `None` for boards without a complete line, including full boards.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size().get();

    let rows = (0..n).find_map(|r| line_owner(board, (0..n).map(|c| r * n + c)));
    if rows.is_some() {
        return rows;
    }

    let cols = (0..n).find_map(|c| line_owner(board, (0..n).map(|r| r * n + c)));
    if cols.is_some() {
        return cols;
    }

    line_owner(board, (0..n).map(|i| i * n + i))
        .or_else(|| line_owner(board, (0..n).map(|i| (i + 1) * n - (i + 1))))
}

/// Returns the player holding every square in the line, if any.
fn line_owner(board: &Board, mut line: impl Iterator<Item = usize>) -> Option<Player> {
    let owner = line.next().and_then(|i| board.get(i)).and_then(Square::player)?;
    line.all(|i| board.get(i) == Some(Square::Occupied(owner)))
        .then_some(owner)
}
