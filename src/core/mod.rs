//! Core types: players, board, move queues, RNG, configuration, state.
//!
//! Everything here is a plain value. The presentation layer owns a
//! `GameState` and replaces it with the one each operation returns.

pub mod player;
pub mod board;
pub mod queue;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{Player, PlayerMap};
pub use board::{Board, Cell, BOARD_SIZE, BOARD_WIDTH};
pub use queue::{queues_consistent, MoveQueue, MoveQueues, MOVE_LIMIT};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{Difficulty, GameMode, MatchConfig, TargetScore, Timing};
pub use state::{GameState, MoveOutcome, Scoreboard};
