//! Error types for the engine, the AI and the match driver.
//!
//! Every error here is local and recoverable: the caller decides whether to
//! retry, ignore or surface it.

use crate::core::Player;
use crate::session::Phase;

/// A move that the rules refuse to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveError {
    #[error("cell index {index} is outside the board (0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("the round is over; {winner} has already won it")]
    RoundOver { winner: Player },

    #[error("the match is over; {winner} reached the target score")]
    MatchOver { winner: Player },
}

/// The AI was asked to move on a board with no empty cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("no empty cell is available")]
pub struct NoMovesAvailableError;

/// Errors raised by the match driver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveError),

    #[error(transparent)]
    NoMovesAvailable(#[from] NoMovesAvailableError),

    #[error("not accepting a human move while {phase}")]
    NotAwaitingHuman { phase: Phase },
}

/// Errors raised when building or parsing configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("target score must be positive")]
    ZeroTargetScore,

    #[error("unknown game mode '{0}' (expected 'single' or 'multi')")]
    UnknownMode(String),

    #[error("unknown difficulty '{0}' (expected 'easy', 'medium' or 'hard')")]
    UnknownDifficulty(String),
}

/// Errors raised when parsing the text form of a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("unexpected character '{0}' in board")]
    BadCell(char),

    #[error("board needs exactly 9 cells, found {0}")]
    WrongLength(usize),
}

/// Errors raised when a saved state breaks the sliding-window invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("a move queue holds {len} cells, more than the limit of {limit}")]
    QueueTooLong { len: usize, limit: usize },

    #[error("queued cell {index} is outside the board (0-8)")]
    CellOutOfRange { index: usize },

    #[error("board marks and move queues disagree")]
    QueuesMismatch,

    #[error("recorded winner does not own the recorded winning line")]
    WinnerMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            InvalidMoveError::Occupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
        assert_eq!(
            InvalidMoveError::RoundOver { winner: Player::X }.to_string(),
            "the round is over; X has already won it"
        );
        assert_eq!(NoMovesAvailableError.to_string(), "no empty cell is available");
    }

    #[test]
    fn test_match_error_from() {
        let err: MatchError = InvalidMoveError::OutOfRange { index: 9 }.into();
        assert!(matches!(
            err,
            MatchError::InvalidMove(InvalidMoveError::OutOfRange { index: 9 })
        ));

        let err: MatchError = NoMovesAvailableError.into();
        assert_eq!(err.to_string(), "no empty cell is available");
    }

    #[test]
    fn test_state_error_messages() {
        assert_eq!(
            StateError::QueueTooLong { len: 5, limit: 3 }.to_string(),
            "a move queue holds 5 cells, more than the limit of 3"
        );
        assert_eq!(
            StateError::CellOutOfRange { index: 9 }.to_string(),
            "queued cell 9 is outside the board (0-8)"
        );
    }
}
