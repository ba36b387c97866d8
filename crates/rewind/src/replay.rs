//! Headless replay: apply moves and describe the result as text.

use anyhow::Result;
use rewind_tictactoe::{BoardSize, Game};
use tracing::{info, instrument};

/// Plays `moves` on a fresh board.
///
/// # Errors
///
/// Fails on the first rejected move, naming its position in the sequence.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(size: BoardSize, moves: &[usize]) -> Result<Game> {
    let game = Game::replay(size, moves)?;
    info!(snapshots = game.len(), "Replay finished");
    Ok(game)
}

/// Board, status line, and move list for the viewed snapshot.
///
/// The viewed entry in the move list is marked with `>`.
pub fn report(game: &Game) -> String {
    let view = game.current_view();
    let size = game.size();

    let mut out = String::new();
    out.push_str(&view.board.render());
    out.push_str("\n\n");
    out.push_str(&view.status().to_string());
    out.push_str("\n\n");

    for entry in game.timeline().entries() {
        let marker = if *entry.index() == game.pointer() { '>' } else { ' ' };
        match entry.last_move() {
            Some(action) => out.push_str(&format!(
                "{} {} ({})\n",
                marker,
                entry,
                action.describe(size)
            )),
            None => out.push_str(&format!("{} {}\n", marker, entry)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).expect("valid size")
    }

    #[test]
    fn test_report_for_won_game() {
        let game = replay(size(3), &[0, 4, 1, 5, 2]).expect("legal moves");
        let text = report(&game);

        assert!(text.starts_with("X|X|X\n-+-+-\n.|O|O\n-+-+-\n.|.|.\n\nWinner: X\n"));
        assert!(text.contains("  Go to game start\n"));
        assert!(text.contains("  Go to move #1 (X at row 1, col 1)\n"));
        assert!(text.ends_with("> Go to move #5 (X at row 1, col 3)\n"));
    }

    #[test]
    fn test_report_for_empty_game() {
        let game = replay(size(2), &[]).expect("no moves");
        assert_eq!(
            report(&game),
            ".|.\n-+-\n.|.\n\nNext player: X\n\n> Go to game start\n"
        );
    }

    #[test]
    fn test_rejected_move_names_position_in_sequence() {
        let err = replay(size(3), &[4, 4]).unwrap_err();
        assert_eq!(err.to_string(), "Move #2 (square 4) rejected");
        assert_eq!(err.root_cause().to_string(), "Square 4 is already occupied");
    }
}
