//! Move application with sliding-window eviction.
//!
//! `apply_move` never mutates its inputs: it returns the next board and queues
//! so the caller can swap them in as a unit.

use tracing::debug;

use crate::core::{Board, MoveQueues, Player, BOARD_SIZE};
use crate::error::InvalidMoveError;

/// Board and queues after a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Board with the new mark placed and any evicted mark cleared.
    pub board: Board,

    /// Queues with the new cell appended to the mover's queue.
    pub queues: MoveQueues,

    /// Cell cleared because the mover exceeded the mark limit.
    pub evicted: Option<usize>,
}

/// Check that `index` can be played on `board`.
pub fn validate_move(board: &Board, index: usize) -> Result<(), InvalidMoveError> {
    if index >= BOARD_SIZE {
        return Err(InvalidMoveError::OutOfRange { index });
    }
    if !board.is_empty(index) {
        return Err(InvalidMoveError::Occupied { index });
    }
    Ok(())
}

/// Place `player`'s mark at `index`, evicting their oldest mark if they would
/// otherwise hold more than three.
///
/// Rejects out-of-range and occupied cells. Whether the round already has a
/// winner is tracked by `GameState`, which checks it before calling here.
///
/// ```
/// use sliding_tac_toe::core::{Board, MoveQueue, MoveQueues, Player};
/// use sliding_tac_toe::rules::apply_move;
///
/// let board: Board = "X.. .X. ..X".parse().unwrap();
/// let mut queues = MoveQueues::default();
/// queues[Player::X] = MoveQueue::from_slice(&[0, 4, 8]);
///
/// let result = apply_move(&board, &queues, Player::X, 2).unwrap();
///
/// assert_eq!(result.evicted, Some(0));
/// assert_eq!(result.board.get(0), None);
/// assert_eq!(result.queues[Player::X].as_slice(), &[4, 8, 2]);
/// ```
pub fn apply_move(
    board: &Board,
    queues: &MoveQueues,
    player: Player,
    index: usize,
) -> Result<MoveResult, InvalidMoveError> {
    validate_move(board, index)?;

    let mut board = *board;
    let mut queues = queues.clone();

    board.set(index, Some(player));
    let evicted = queues[player].push_evicting(index);

    if let Some(old) = evicted {
        board.set(old, None);
        debug!(%player, placed = index, evicted = old, "sliding window evicted oldest mark");
    }

    Ok(MoveResult {
        board,
        queues,
        evicted,
    })
}
