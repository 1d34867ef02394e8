//! Per-player move queues for the sliding window.
//!
//! A queue lists the cells a player currently occupies, oldest first. It never
//! holds more than `MOVE_LIMIT` entries once a move has been applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Board, PlayerMap, BOARD_SIZE};
use crate::error::StateError;

/// Marks a player may have on the board at once.
pub const MOVE_LIMIT: usize = 3;

/// Occupied cells for one player, oldest first.
///
/// SmallVec has room for the transient fourth entry, so pushing never
/// allocates. Serialized as a plain list; deserializing rejects lists longer
/// than `MOVE_LIMIT` or cells off the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct MoveQueue {
    cells: SmallVec<[usize; MOVE_LIMIT + 1]>,
}

/// One queue per player.
pub type MoveQueues = PlayerMap<MoveQueue>;

impl MoveQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue from cells listed oldest first.
    ///
    /// Panics if more than `MOVE_LIMIT` cells are given.
    #[must_use]
    pub fn from_slice(cells: &[usize]) -> Self {
        assert!(
            cells.len() <= MOVE_LIMIT,
            "A move queue holds at most {MOVE_LIMIT} cells"
        );
        Self {
            cells: SmallVec::from_slice(cells),
        }
    }

    /// Cells, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }

    /// Number of cells held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the queue holds `index`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Append `index` and drop the oldest entry if the limit is exceeded.
    ///
    /// Returns the dropped cell.
    pub(crate) fn push_evicting(&mut self, index: usize) -> Option<usize> {
        self.cells.push(index);
        if self.cells.len() > MOVE_LIMIT {
            Some(self.cells.remove(0))
        } else {
            None
        }
    }
}

impl TryFrom<Vec<usize>> for MoveQueue {
    type Error = StateError;

    fn try_from(cells: Vec<usize>) -> Result<Self, Self::Error> {
        if cells.len() > MOVE_LIMIT {
            return Err(StateError::QueueTooLong {
                len: cells.len(),
                limit: MOVE_LIMIT,
            });
        }
        if let Some(&index) = cells.iter().find(|&&i| i >= BOARD_SIZE) {
            return Err(StateError::CellOutOfRange { index });
        }
        Ok(Self {
            cells: SmallVec::from_vec(cells),
        })
    }
}

impl From<MoveQueue> for Vec<usize> {
    fn from(queue: MoveQueue) -> Self {
        queue.cells.into_vec()
    }
}

/// Check the board/queue agreement every reachable state satisfies.
///
/// - no queue is longer than `MOVE_LIMIT`
/// - each queued cell holds its owner's mark
/// - each marked cell is queued exactly once, by its owner
#[must_use]
pub fn queues_consistent(board: &Board, queues: &MoveQueues) -> bool {
    let mut seen = [false; BOARD_SIZE];

    for (player, queue) in queues.iter() {
        if queue.len() > MOVE_LIMIT {
            return false;
        }
        for &index in queue.as_slice() {
            if index >= BOARD_SIZE || seen[index] || board.get(index) != Some(player) {
                return false;
            }
            seen[index] = true;
        }
    }

    board
        .cells()
        .iter()
        .zip(seen)
        .all(|(cell, queued)| cell.is_some() == queued)
}
