//! # sliding-tac-toe
//!
//! Rules engine and heuristic AI for tic-tac-toe with a sliding window: each
//! side keeps at most three marks on the board, and a fourth placement evicts
//! that side's oldest mark.
//!
//! ## Design Principles
//!
//! 1. **Value In, Value Out**: Engine operations borrow the current state and
//!    return the next one. The caller owns the only mutable state and swaps it
//!    in as a unit.
//!
//! 2. **Injectable Randomness**: The AI draws through `RandomSource`, so a
//!    seeded `GameRng` (or a scripted source in tests) makes play reproducible.
//!
//! 3. **No Hidden Clock**: Delays are deadlines on a caller-supplied timeline,
//!    handled by an explicit state machine rather than timers.
//!
//! ## Modules
//!
//! - `core`: Players, board, move queues, RNG, configuration, game state
//! - `rules`: Win detection and move application with eviction
//! - `ai`: Difficulty-tiered move selection
//! - `session`: Match driver with timed AI moves and round resets
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod ai;
pub mod session;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Player, PlayerMap, MoveQueue, MoveQueues, MOVE_LIMIT,
    GameRng, GameRngState, RandomSource,
    Difficulty, GameMode, MatchConfig, TargetScore, Timing,
    GameState, MoveOutcome, Scoreboard,
};

pub use crate::rules::{apply_move, check_winner, MoveResult, Win, WinningLine, WINNING_LINES};

pub use crate::ai::{get_ai_move, HeuristicPolicy, MovePolicy, MoveReason, UniformPolicy};

pub use crate::session::{Match, MatchEvent, Phase};

pub use crate::error::{
    ConfigError, InvalidMoveError, MatchError, NoMovesAvailableError, ParseBoardError,
    StateError,
};
