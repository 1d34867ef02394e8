//! Match driver: turn order, AI scheduling and round resets.
//!
//! The pure rule engine knows nothing about time. This module layers the
//! delayed AI move and the delayed board reset on top of `GameState` as an
//! explicit state machine, driven by timestamps the caller supplies.
//!
//! ```
//! use std::time::Duration;
//! use sliding_tac_toe::core::{Difficulty, GameMode, MatchConfig};
//! use sliding_tac_toe::session::{Match, Phase};
//!
//! let config = MatchConfig::new()
//!     .with_mode(GameMode::Single)
//!     .with_difficulty(Difficulty::Hard);
//! let mut game = Match::new(config);
//!
//! game.play(0, Duration::ZERO).unwrap();
//! assert!(matches!(game.phase(), Phase::AwaitingAiMove { .. }));
//!
//! // Half a second later the AI answers
//! game.tick(Duration::from_millis(500)).unwrap();
//! assert_eq!(game.phase(), Phase::AwaitingHumanMove);
//! ```

mod machine;

pub use machine::{Match, MatchEvent, Phase};
