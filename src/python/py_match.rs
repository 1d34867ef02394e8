//! Match driver bindings for Python.

use pyo3::prelude::*;
use std::time::Duration;

use crate::core::{Difficulty, GameMode, MatchConfig, Player, TargetScore};
use crate::session::{Match, MatchEvent};

use super::py_core::value_error;

fn describe(event: &MatchEvent) -> String {
    match event {
        MatchEvent::MovePlayed {
            player,
            index,
            evicted,
            by_ai,
        } => {
            let who = if *by_ai { "ai" } else { "human" };
            match evicted {
                Some(old) => format!("move {player} {index} ({who}, evicted {old})"),
                None => format!("move {player} {index} ({who})"),
            }
        }
        MatchEvent::RoundWon { player, line } => format!("round {player} {:?}", line.cells()),
        MatchEvent::MatchWon { player } => format!("match {player}"),
        MatchEvent::BoardReset => "reset".to_string(),
    }
}

fn describe_all(events: &[MatchEvent]) -> Vec<String> {
    events.iter().map(describe).collect()
}

/// Python wrapper for Match.
///
/// Times are milliseconds since the match was created.
#[pyclass(name = "Match")]
pub struct PyMatch {
    inner: Match,
}

#[pymethods]
impl PyMatch {
    /// Create a new match.
    ///
    /// # Arguments
    /// - mode: "single" (vs AI) or "multi"
    /// - difficulty: "easy", "medium" or "hard"
    /// - target_score: round wins needed to take the match
    /// - seed: RNG seed for the AI
    #[new]
    #[pyo3(signature = (mode = "multi", difficulty = "medium", target_score = 5, seed = 42))]
    fn new(mode: &str, difficulty: &str, target_score: u32, seed: u64) -> PyResult<Self> {
        let config = MatchConfig::new()
            .with_mode(mode.parse::<GameMode>().map_err(value_error)?)
            .with_difficulty(difficulty.parse::<Difficulty>().map_err(value_error)?)
            .with_target_score(TargetScore::new(target_score).map_err(value_error)?)
            .with_seed(seed);
        Ok(Self {
            inner: Match::new(config),
        })
    }

    /// Play a human move. Returns event descriptions.
    fn play(&mut self, index: usize, now_ms: u64) -> PyResult<Vec<String>> {
        let events = self
            .inner
            .play(index, Duration::from_millis(now_ms))
            .map_err(value_error)?;
        Ok(describe_all(&events))
    }

    /// Fire due transitions. Returns event descriptions.
    fn tick(&mut self, now_ms: u64) -> PyResult<Vec<String>> {
        let events = self
            .inner
            .tick(Duration::from_millis(now_ms))
            .map_err(value_error)?;
        Ok(describe_all(&events))
    }

    /// Zero the scores and clear the board.
    fn reset_match(&mut self, now_ms: u64) {
        self.inner.reset_match(Duration::from_millis(now_ms));
    }

    /// Switch to "single" or "multi". Resets the match.
    fn set_mode(&mut self, mode: &str, now_ms: u64) -> PyResult<()> {
        let mode: GameMode = mode.parse().map_err(value_error)?;
        self.inner.set_mode(mode, Duration::from_millis(now_ms));
        Ok(())
    }

    /// Flip between single and multiplayer. Resets the match.
    fn toggle_mode(&mut self, now_ms: u64) {
        self.inner.toggle_mode(Duration::from_millis(now_ms));
    }

    /// Change the AI tier. Resets the match.
    fn set_difficulty(&mut self, difficulty: &str, now_ms: u64) -> PyResult<()> {
        let difficulty: Difficulty = difficulty.parse().map_err(value_error)?;
        self.inner.set_difficulty(difficulty, Duration::from_millis(now_ms));
        Ok(())
    }

    /// Change the round wins needed. Resets the match.
    fn set_target_score(&mut self, target_score: u32, now_ms: u64) -> PyResult<()> {
        let target = TargetScore::new(target_score).map_err(value_error)?;
        self.inner.set_target_score(target, Duration::from_millis(now_ms));
        Ok(())
    }

    /// Board in text form, one row per line.
    #[getter]
    fn board(&self) -> String {
        self.inner.state().board().to_string()
    }

    /// (X score, O score)
    #[getter]
    fn scores(&self) -> (u32, u32) {
        let scores = self.inner.state().scores();
        (scores[Player::X], scores[Player::O])
    }

    #[getter]
    fn current_player(&self) -> String {
        self.inner.state().current_player().to_string()
    }

    #[getter]
    fn mode(&self) -> String {
        self.inner.state().mode().to_string()
    }

    #[getter]
    fn difficulty(&self) -> String {
        self.inner.state().difficulty().to_string()
    }

    #[getter]
    fn target_score(&self) -> u32 {
        self.inner.state().target_score().get()
    }

    /// Winner of the current round, if it has been decided.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.inner.state().winner().map(|p| p.to_string())
    }

    /// Cells of the completed line, for highlighting.
    #[getter]
    fn winning_line(&self) -> Option<Vec<usize>> {
        self.inner
            .state()
            .winning_line()
            .map(|line| line.cells().to_vec())
    }

    #[getter]
    fn phase(&self) -> String {
        self.inner.phase().to_string()
    }

    /// When the next timed transition is due, if any.
    #[getter]
    fn next_deadline_ms(&self) -> Option<u64> {
        self.inner
            .next_deadline()
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "Match(mode={}, difficulty={}, X={}, O={}, phase='{}')",
            state.mode(),
            state.difficulty(),
            state.scores()[Player::X],
            state.scores()[Player::O],
            self.inner.phase()
        )
    }
}
