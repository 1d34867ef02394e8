//! Caller-driven match state machine.
//!
//! `Match` owns a `GameState` and moves between four phases:
//!
//! ```text
//! AwaitingHumanMove --play--> AwaitingAiMove --tick(due)--> AwaitingHumanMove
//!        |                          |
//!        +-------- win -------------+--> RoundOver --tick(resume_at)--> (next round)
//!                                   |
//!                                   +--> MatchOver (target score reached)
//! ```
//!
//! Time is never read from a clock. The caller passes `now` as the elapsed
//! time since the match was created; deadlines are expressed on the same
//! scale. Transitions fire on the first `tick` whose `now` reaches them.

use std::time::Duration;

use tracing::{info, instrument};

use crate::ai::{HeuristicPolicy, MovePolicy};
use crate::core::{
    Difficulty, GameMode, GameRng, GameRngState, GameState, MatchConfig, Player, TargetScore,
};
use crate::error::MatchError;
use crate::rules::WinningLine;

/// Where the match is waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// A human may play.
    AwaitingHumanMove,
    /// The AI will move once `now` reaches `due`.
    AwaitingAiMove { due: Duration },
    /// The board clears once `now` reaches `resume_at`.
    RoundOver { resume_at: Duration },
    /// A player reached the target score. Only a reset leaves this phase.
    MatchOver { winner: Player },
}

impl Phase {
    /// Time of the next scheduled transition, if one is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        match *self {
            Phase::AwaitingAiMove { due } => Some(due),
            Phase::RoundOver { resume_at } => Some(resume_at),
            Phase::AwaitingHumanMove | Phase::MatchOver { .. } => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHumanMove => write!(f, "awaiting a human move"),
            Phase::AwaitingAiMove { .. } => write!(f, "awaiting the AI move"),
            Phase::RoundOver { .. } => write!(f, "the round is over"),
            Phase::MatchOver { winner } => write!(f, "the match is over ({winner} won)"),
        }
    }
}

/// Something the presentation layer may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    /// A mark was placed.
    MovePlayed {
        player: Player,
        index: usize,
        evicted: Option<usize>,
        by_ai: bool,
    },
    /// A line was completed and the winner credited.
    RoundWon { player: Player, line: WinningLine },
    /// The round winner reached the target score.
    MatchWon { player: Player },
    /// The board was cleared for the next round.
    BoardReset,
}

/// A match between two humans or a human and the AI.
pub struct Match {
    config: MatchConfig,
    state: GameState,
    phase: Phase,
    rng: GameRng,
    /// Replaces the heuristic cascade when set.
    policy: Option<Box<dyn MovePolicy>>,
}

impl Match {
    /// Start a match at time zero.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let state = GameState::new(&config);
        let rng = GameRng::new(config.seed);
        let mut m = Self {
            config,
            state,
            phase: Phase::AwaitingHumanMove,
            rng,
            policy: None,
        };
        m.phase = m.schedule(Duration::ZERO);
        m
    }

    /// Use `policy` for AI turns instead of the difficulty's cascade.
    #[must_use]
    pub fn with_policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time of the next scheduled transition.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.phase.deadline()
    }

    /// RNG position, for reproducing the AI's remaining draws.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.snapshot()
    }

    // === Input ===

    /// Play `index` for the human whose turn it is.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play(&mut self, index: usize, now: Duration) -> Result<Vec<MatchEvent>, MatchError> {
        if self.phase != Phase::AwaitingHumanMove {
            return Err(MatchError::NotAwaitingHuman { phase: self.phase });
        }
        self.apply(index, now, false)
    }

    /// Fire every transition whose deadline is at or before `now`.
    ///
    /// Chained transitions are evaluated at their own deadlines, so a late
    /// tick produces the same result as a series of punctual ones.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn tick(&mut self, now: Duration) -> Result<Vec<MatchEvent>, MatchError> {
        let mut events = Vec::new();

        loop {
            match self.phase {
                Phase::AwaitingAiMove { due } if due <= now => {
                    let index = self.choose_ai_move()?;
                    events.extend(self.apply(index, due, true)?);
                }
                Phase::RoundOver { resume_at } if resume_at <= now => {
                    self.state = self.state.reset_round();
                    events.push(MatchEvent::BoardReset);
                    self.phase = self.schedule(resume_at);
                }
                _ => break,
            }
        }

        Ok(events)
    }

    /// Zero the scores and clear the board.
    pub fn reset_match(&mut self, now: Duration) {
        self.state = self.state.reset_match();
        self.phase = self.schedule(now);
    }

    /// Switch mode. Resets the match.
    pub fn set_mode(&mut self, mode: GameMode, now: Duration) {
        self.config.mode = mode;
        self.state = self.state.with_mode(mode);
        self.phase = self.schedule(now);
    }

    /// Flip between single and multiplayer. Resets the match.
    pub fn toggle_mode(&mut self, now: Duration) {
        self.set_mode(self.config.mode.toggled(), now);
    }

    /// Change AI difficulty. Resets the match.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, now: Duration) {
        self.config.difficulty = difficulty;
        self.state = self.state.with_difficulty(difficulty);
        self.phase = self.schedule(now);
    }

    /// Change the target score. Resets the match.
    pub fn set_target_score(&mut self, target: TargetScore, now: Duration) {
        self.config.target_score = target;
        self.state = self.state.with_target_score(target);
        self.phase = self.schedule(now);
    }

    // === Internals ===

    fn choose_ai_move(&mut self) -> Result<usize, MatchError> {
        let board = self.state.board();
        let player = self.state.current_player();
        let index = match &self.policy {
            Some(policy) => policy.select_move(board, player, &mut self.rng)?,
            None => HeuristicPolicy::new(self.state.difficulty()).select_move(
                board,
                player,
                &mut self.rng,
            )?,
        };
        Ok(index)
    }

    fn apply(&mut self, index: usize, now: Duration, by_ai: bool) -> Result<Vec<MatchEvent>, MatchError> {
        let (next, outcome) = self.state.play(index)?;
        self.state = next;

        let mut events = vec![MatchEvent::MovePlayed {
            player: outcome.player,
            index: outcome.index,
            evicted: outcome.evicted,
            by_ai,
        }];

        if let Some(win) = outcome.win {
            info!(
                player = %win.player,
                line = ?win.line.cells(),
                x = self.state.scores()[Player::X],
                o = self.state.scores()[Player::O],
                "round won"
            );
            events.push(MatchEvent::RoundWon {
                player: win.player,
                line: win.line,
            });
            if outcome.match_won {
                info!(player = %win.player, target = %self.state.target_score(), "match won");
                events.push(MatchEvent::MatchWon { player: win.player });
            }
        }

        self.phase = self.schedule(now);
        Ok(events)
    }

    /// Phase implied by the current state, with deadlines measured from `now`.
    fn schedule(&self, now: Duration) -> Phase {
        let timing = self.config.timing;

        if let Some(winner) = self.state.match_winner() {
            Phase::MatchOver { winner }
        } else if self.state.winner().is_some() {
            Phase::RoundOver {
                resume_at: now + timing.round_reset_delay,
            }
        } else if self.state.is_ai_turn() {
            Phase::AwaitingAiMove {
                due: now + timing.ai_move_delay,
            }
        } else {
            Phase::AwaitingHumanMove
        }
    }
}
