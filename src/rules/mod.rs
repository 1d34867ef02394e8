//! Rule engine: win detection and move application.
//!
//! Both operations are pure functions over a board:
//! - `check_winner` scans the 8 lines in a fixed order
//! - `apply_move` places a mark and enforces the three-mark window
//!
//! Neither keeps state between calls.

pub mod engine;
pub mod lines;

pub use engine::{apply_move, validate_move, MoveResult};
pub use lines::{check_winner, completed_lines, Win, WinningLine, WINNING_LINES};
