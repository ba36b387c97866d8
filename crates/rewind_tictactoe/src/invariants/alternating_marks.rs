//! Alternating marks invariant: players alternate X, O, X, O, ...

use super::super::{Player, Square, Timeline};
use super::Invariant;

/// Invariant: snapshot `i` was produced by the player for ply `i - 1`.
///
/// The starting snapshot records no move. Every later snapshot records a
/// move whose player alternates starting with X, and whose square is empty
/// before and holds that player's mark after.
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();

        if snapshots.first().is_some_and(|s| s.last_move().is_some()) {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(ply, pair)| {
            let Some(mov) = *pair[1].last_move() else {
                return false;
            };
            mov.player == Player::for_ply(ply)
                && pair[0].board().get(mov.index) == Some(Square::Empty)
                && pair[1].board().get(mov.index) == Some(Square::Occupied(mov.player))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Game, Move, Snapshot};

    fn size4() -> BoardSize {
        BoardSize::new(4).expect("valid size")
    }

    #[test]
    fn test_empty_timeline_holds() {
        assert!(AlternatingMarksInvariant::holds(&Timeline::new(size4())));
    }

    #[test]
    fn test_played_moves_hold() {
        let game = Game::replay(size4(), &[0, 5, 10, 15, 3]).expect("legal moves");
        assert!(AlternatingMarksInvariant::holds(game.timeline()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let game = Game::replay(size4(), &[0]).expect("legal move");
        let mut timeline = game.timeline().clone();

        let board = timeline.snapshots[1]
            .board()
            .with_mark(1, Player::X)
            .expect("empty square");
        timeline
            .snapshots
            .push(Snapshot::new(board, Some(Move::new(Player::X, 1))));

        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }

    #[test]
    fn test_move_disagreeing_with_board_violates() {
        let game = Game::replay(size4(), &[0]).expect("legal move");
        let mut timeline = game.timeline().clone();

        let board = timeline.snapshots[1]
            .board()
            .with_mark(1, Player::O)
            .expect("empty square");
        timeline
            .snapshots
            .push(Snapshot::new(board, Some(Move::new(Player::O, 2))));

        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }
}
