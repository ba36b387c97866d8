//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::game::Game;
use super::invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the viewed snapshot has no winner yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] if the viewed snapshot is won.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match *game.current().winner() {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the index is on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with [`MoveError::OutOfBounds`] if `index` is off the board.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), MoveError> {
        let cells = game.size().cells();
        if index >= cells {
            Err(MoveError::OutOfBounds { index, cells })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the index is empty on the viewed snapshot.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), MoveError> {
        if game.current().board().is_empty(index) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(index))
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided,
/// the index is on the board, and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), MoveError> {
        NoWinnerYet::check(game)?;
        InBounds::check(index, game)?;
        SquareIsEmpty::check(index, game)?;
        Ok(())
    }
}

/// Invariant on a game: the view pointer selects an existing snapshot.
pub struct PointerInBounds;

impl Invariant<Game> for PointerInBounds {
    fn holds(game: &Game) -> bool {
        game.pointer() < game.timeline().len()
    }

    fn description() -> &'static str {
        "View pointer selects an existing snapshot"
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Viewed snapshot has no winner
/// - Index is on the board
/// - Square is empty
///
/// Postconditions:
/// - Timeline invariants hold
/// - Everything after the old pointer was replaced by exactly one snapshot
/// - Pointer selects the new snapshot
pub struct MoveContract;

impl Contract<Game, usize> for MoveContract {
    fn pre(game: &Game, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let mut violations = TimelineInvariants::check_all(after.timeline())
            .err()
            .unwrap_or_default();

        if !PointerInBounds::holds(after) {
            violations.push(InvariantViolation::new(PointerInBounds::description()));
        }

        let expected_len = before.pointer() + 2;
        if after.timeline().len() != expected_len || after.pointer() != expected_len - 1 {
            violations.push(InvariantViolation::new(
                "Move replaces the future with exactly one snapshot",
            ));
        }

        let past = before.pointer() + 1;
        if after.timeline().snapshots().get(..past) != before.timeline().snapshots().get(..past) {
            violations.push(InvariantViolation::new("Move preserves the past"));
        }

        if violations.is_empty() {
            return Ok(());
        }

        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Move postcondition failed");
        Err(MoveError::InvariantViolation(format!(
            "Postcondition failed: {}",
            descriptions
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Player, Snapshot};

    fn game(moves: &[usize]) -> Game {
        Game::replay(BoardSize::new(3).expect("valid size"), moves).expect("legal moves")
    }

    #[test]
    fn test_precondition_empty_square() {
        assert!(MoveContract::pre(&game(&[]), &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        assert_eq!(
            MoveContract::pre(&game(&[4]), &4),
            Err(MoveError::SquareOccupied(4))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert_eq!(
            MoveContract::pre(&game(&[]), &9),
            Err(MoveError::OutOfBounds { index: 9, cells: 9 })
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let won = game(&[0, 4, 1, 5, 2]);
        assert_eq!(
            MoveContract::pre(&won, &0),
            Err(MoveError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = game(&[0, 4]);
        let mut after = before.clone();
        after.apply_move(8).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branching_move() {
        let mut before = game(&[0, 4, 8]);
        before.jump_to(1).expect("existing snapshot");
        let mut after = before.clone();
        after.apply_move(2).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = game(&[0]);
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");

        // Sneak an extra snapshot onto the end without moving the pointer.
        let extra = after.current().board().with_mark(8, Player::X).expect("empty");
        after.timeline.snapshots.push(Snapshot::new(extra, None));

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
