//! Single-cell delta invariant: each move fills exactly one empty square.

use super::super::{Square, Timeline};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square is empty before and occupied after. Marks are never erased or
/// overwritten, and no move places more than one mark.
pub struct SingleCellDeltaInvariant;

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let before = pair[0].board().squares();
            let after = pair[1].board().squares();
            if before.len() != after.len() {
                return false;
            }

            let mut changed = before.iter().zip(after).filter(|(b, a)| b != a);
            matches!(
                (changed.next(), changed.next()),
                (Some((Square::Empty, Square::Occupied(_))), None)
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}
