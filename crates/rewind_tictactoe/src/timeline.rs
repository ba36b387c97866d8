//! Ordered history of board snapshots.
//!
//! Snapshot 0 is always the empty board. A new move from an earlier
//! snapshot drops everything after it before appending, so the timeline
//! stays a single line rather than a tree.

use super::action::Move;
use super::rules::check_winner;
use super::types::{Board, BoardSize, Player};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// One immutable point in the game history.
///
/// The winner is computed once when the snapshot is created. Snapshots never
/// change afterwards, so the cached value cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Snapshot {
    /// Board at this point.
    board: Board,
    /// Move that produced this board; `None` for the starting board.
    last_move: Option<Move>,
    /// Winner on this board, if any.
    winner: Option<Player>,
}

impl Snapshot {
    /// Starting snapshot for a board of `size`.
    pub fn start(size: BoardSize) -> Self {
        Self::new(Board::new(size), None)
    }

    /// Wraps a board, evaluating its winner.
    #[instrument(skip(board))]
    pub fn new(board: Board, last_move: Option<Move>) -> Self {
        let winner = check_winner(&board);
        Self {
            board,
            last_move,
            winner,
        }
    }
}

/// One entry in the selectable move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    index: usize,
    /// Button label, `Go to game start` or `Go to move #N`.
    label: String,
    /// Move that produced the snapshot.
    last_move: Option<Move>,
}

impl MoveEntry {
    /// Label shown for snapshot `index`.
    pub fn label_for(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Append-with-truncation history of snapshots sharing one board size.
///
/// Never empty: the starting snapshot is created with the timeline and can't
/// be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(crate) size: BoardSize,
    pub(crate) snapshots: Vec<Snapshot>,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            snapshots: vec![Snapshot::start(size)],
        }
    }

    /// Board size shared by every snapshot.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if the timeline holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// One move-list entry per snapshot.
    pub fn entries(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveEntry {
                index,
                label: MoveEntry::label_for(index),
                last_move: snapshot.last_move,
            })
    }

    /// Drops every snapshot after `from` and appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, from: usize, snapshot: Snapshot) -> usize {
        let keep = from + 1;
        if keep < self.snapshots.len() {
            debug!(
                dropped = self.snapshots.len() - keep,
                "Discarding abandoned future"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}
