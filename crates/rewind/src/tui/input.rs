//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::{BoardSize, Position};

/// Moves cursor based on arrow keys or `hjkl`.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode, size: BoardSize) -> Position {
    let last = size.get() - 1;

    match key {
        KeyCode::Left | KeyCode::Char('h') => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => Position::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Position::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}
