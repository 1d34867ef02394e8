//! Match configuration types.
//!
//! The presentation layer owns these values and passes them in:
//! - `GameMode`: two humans, or a human against the AI
//! - `Difficulty`: which heuristic cascade the AI runs
//! - `TargetScore`: round wins needed to take the match
//! - `Timing`: delays before an AI move and before the board clears after a win
//! - `MatchConfig`: combines all of the above plus the AI side and RNG seed

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use super::Player;
use crate::error::ConfigError;

/// Who controls the two sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One human against the AI.
    Single,
    /// Two humans sharing the board.
    #[default]
    Multi,
}

impl GameMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            GameMode::Single => GameMode::Multi,
            GameMode::Multi => GameMode::Single,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameMode::Single => "single",
            GameMode::Multi => "multi",
        })
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(GameMode::Single),
            "multi" => Ok(GameMode::Multi),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// AI difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Whether this tier looks for immediate wins and blocks.
    #[must_use]
    pub const fn is_tactical(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Round wins needed to take the match. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TargetScore(u32);

impl TargetScore {
    /// The choices offered to players.
    pub const PRESETS: [TargetScore; 3] = [TargetScore(3), TargetScore(5), TargetScore(9)];

    /// Create a target score, rejecting zero.
    pub fn new(score: u32) -> Result<Self, ConfigError> {
        if score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        Ok(Self(score))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for TargetScore {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for TargetScore {
    type Error = ConfigError;

    fn try_from(score: u32) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<TargetScore> for u32 {
    fn from(score: TargetScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for TargetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delays applied by the match driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Pause before the AI's move is applied.
    pub ai_move_delay: Duration,

    /// Pause between a round win and the board clearing.
    pub round_reset_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            ai_move_delay: Duration::from_millis(500),
            round_reset_delay: Duration::from_millis(2000),
        }
    }
}

impl Timing {
    /// No delays at all. Every scheduled transition fires on the next tick.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            ai_move_delay: Duration::ZERO,
            round_reset_delay: Duration::ZERO,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Human vs AI, or two humans.
    pub mode: GameMode,

    /// AI tier (ignored in `Multi` mode).
    pub difficulty: Difficulty,

    /// Round wins needed to take the match.
    pub target_score: TargetScore,

    /// Side the AI plays in `Single` mode.
    pub ai_player: Player,

    /// Scheduling delays.
    pub timing: Timing,

    /// Seed for the AI's random draws.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            target_score: TargetScore::default(),
            ai_player: crate::ai::DEFAULT_AI_PLAYER,
            timing: Timing::default(),
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the AI difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the target score.
    #[must_use]
    pub fn with_target_score(mut self, target: TargetScore) -> Self {
        self.target_score = target;
        self
    }

    /// Set which side the AI plays.
    #[must_use]
    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    /// Set the scheduling delays.
    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
