//! Uniform size invariant: every snapshot shares the timeline's board size.

use super::super::Timeline;
use super::Invariant;

/// Invariant: every snapshot has the timeline's board size.
pub struct UniformSizeInvariant;

impl Invariant<Timeline> for UniformSizeInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let size = timeline.size();
        timeline
            .snapshots()
            .iter()
            .all(|s| s.board().size() == size && s.board().squares().len() == size.cells())
    }

    fn description() -> &'static str {
        "Every snapshot has the timeline's board size"
    }
}
