//! AI move selection.
//!
//! ## Overview
//!
//! The AI is a fixed heuristic cascade, not a search. Each difficulty tier
//! runs a different subset of the steps in `HeuristicPolicy`. All randomness
//! is drawn from a caller-supplied `RandomSource`, so a seeded `GameRng`
//! makes a whole game reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use sliding_tac_toe::ai::get_ai_move;
//! use sliding_tac_toe::core::{Board, Difficulty, GameRng};
//!
//! let board: Board = "XX. .O. ...".parse().unwrap();
//! let mut rng = GameRng::new(42);
//!
//! // Medium and hard always block an immediate threat
//! assert_eq!(get_ai_move(&board, Difficulty::Hard, &mut rng), Ok(2));
//! ```
//!
//! ## Custom Policies
//!
//! Implement `MovePolicy` and hand it to `session::Match::with_policy`.

pub mod policy;

pub use policy::{
    preferred_cell, winning_cell, HeuristicPolicy, MovePolicy, MoveReason, UniformPolicy,
    PREFERRED_CELLS,
};

use crate::core::{Board, Difficulty, Player, RandomSource};
use crate::error::NoMovesAvailableError;

/// Side the AI plays unless configured otherwise.
pub const DEFAULT_AI_PLAYER: Player = Player::O;

/// Choose a move for the AI (playing `O`) at the given difficulty.
pub fn get_ai_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Result<usize, NoMovesAvailableError> {
    HeuristicPolicy::new(difficulty).select_move(board, DEFAULT_AI_PLAYER, rng)
}
