//! Game state owned by the presentation layer.
//!
//! ## GameState
//!
//! Complete state of a match:
//! - Board and per-player move queues
//! - Scoreboard, current player
//! - Last round winner and winning line
//! - Mode, difficulty, target score and AI side
//!
//! Every operation borrows `&self` and returns a fresh `GameState`, so the
//! owner can compute the next state and swap it in atomically.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    queues_consistent, Board, Difficulty, GameMode, MatchConfig, MoveQueues, Player, PlayerMap,
    TargetScore,
};
use crate::error::{InvalidMoveError, StateError};
use crate::rules::{apply_move, check_winner, completed_lines, Win, WinningLine};

/// Round wins per player.
pub type Scoreboard = PlayerMap<u32>;

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Who moved.
    pub player: Player,
    /// Cell that was marked.
    pub index: usize,
    /// Cell cleared by the sliding window.
    pub evicted: Option<usize>,
    /// Line completed by this move.
    pub win: Option<Win>,
    /// Whether the win brought the winner to the target score.
    pub match_won: bool,
}

/// Complete match state.
///
/// Deserializing checks that the board agrees with the move queues and that
/// a recorded winner owns the recorded line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct GameState {
    board: Board,
    queues: MoveQueues,
    scores: Scoreboard,
    current_player: Player,
    winner: Option<Player>,
    winning_line: Option<WinningLine>,
    mode: GameMode,
    difficulty: Difficulty,
    target_score: TargetScore,
    ai_player: Player,
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct SavedState {
    board: Board,
    queues: MoveQueues,
    scores: Scoreboard,
    current_player: Player,
    winner: Option<Player>,
    winning_line: Option<WinningLine>,
    mode: GameMode,
    difficulty: Difficulty,
    target_score: TargetScore,
    ai_player: Player,
}

impl TryFrom<SavedState> for GameState {
    type Error = StateError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        if !queues_consistent(&saved.board, &saved.queues) {
            return Err(StateError::QueuesMismatch);
        }
        let line_owner = saved.winning_line.and_then(|line| line.owner(&saved.board));
        if saved.winner != line_owner || saved.winner.is_some() != saved.winning_line.is_some() {
            return Err(StateError::WinnerMismatch);
        }

        Ok(GameState {
            board: saved.board,
            queues: saved.queues,
            scores: saved.scores,
            current_player: saved.current_player,
            winner: saved.winner,
            winning_line: saved.winning_line,
            mode: saved.mode,
            difficulty: saved.difficulty,
            target_score: saved.target_score,
            ai_player: saved.ai_player,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl GameState {
    /// Fresh match: empty board, zero scores, `X` to move.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            board: Board::empty(),
            queues: MoveQueues::default(),
            scores: Scoreboard::default(),
            current_player: Player::FIRST,
            winner: None,
            winning_line: None,
            mode: config.mode,
            difficulty: config.difficulty,
            target_score: config.target_score,
            ai_player: config.ai_player,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn queues(&self) -> &MoveQueues {
        &self.queues
    }

    #[must_use]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Winner of the current round, until the board is reset.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Line completed by the current round's winner.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn target_score(&self) -> TargetScore {
        self.target_score
    }

    #[must_use]
    pub fn ai_player(&self) -> Player {
        self.ai_player
    }

    /// Player whose score has reached the target, if any.
    #[must_use]
    pub fn match_winner(&self) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&p| self.scores[p] >= self.target_score.get())
    }

    /// Whether the AI should move next.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::Single
            && self.current_player == self.ai_player
            && self.winner.is_none()
            && self.match_winner().is_none()
    }

    /// Cells the current player may mark. Empty once the round is decided.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.winner.is_some() || self.match_winner().is_some() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    // === Transitions ===

    /// Play `index` for the current player.
    ///
    /// Applies the move with eviction, checks for a win, credits the winner
    /// and passes the turn.
    pub fn play(&self, index: usize) -> Result<(GameState, MoveOutcome), InvalidMoveError> {
        if let Some(winner) = self.match_winner() {
            return Err(InvalidMoveError::MatchOver { winner });
        }
        if let Some(winner) = self.winner {
            return Err(InvalidMoveError::RoundOver { winner });
        }

        let player = self.current_player;
        let result = apply_move(&self.board, &self.queues, player, index)?;

        let win = check_winner(&result.board);
        if win.is_some() {
            let lines = completed_lines(&result.board);
            if lines.len() > 1 {
                debug!(count = lines.len(), "several lines completed at once; reporting the first");
            }
        }

        let mut scores = self.scores.clone();
        if let Some(w) = win {
            scores[w.player] += 1;
        }

        let next = GameState {
            board: result.board,
            queues: result.queues,
            scores,
            current_player: player.opponent(),
            winner: win.map(|w| w.player),
            winning_line: win.map(|w| w.line),
            ..self.clone()
        };

        let outcome = MoveOutcome {
            player,
            index,
            evicted: result.evicted,
            win,
            match_won: next.match_winner().is_some(),
        };

        Ok((next, outcome))
    }

    /// Clear the board for the next round. Scores are kept.
    #[must_use]
    pub fn reset_round(&self) -> GameState {
        GameState {
            board: Board::empty(),
            queues: MoveQueues::default(),
            current_player: Player::FIRST,
            winner: None,
            winning_line: None,
            ..self.clone()
        }
    }

    /// Clear the board and the scores.
    #[must_use]
    pub fn reset_match(&self) -> GameState {
        GameState {
            scores: Scoreboard::default(),
            ..self.reset_round()
        }
    }

    /// Switch mode. Resets the match.
    #[must_use]
    pub fn with_mode(&self, mode: GameMode) -> GameState {
        GameState {
            mode,
            ..self.reset_match()
        }
    }

    /// Change AI difficulty. Resets the match.
    #[must_use]
    pub fn with_difficulty(&self, difficulty: Difficulty) -> GameState {
        GameState {
            difficulty,
            ..self.reset_match()
        }
    }

    /// Change the target score. Resets the match.
    #[must_use]
    pub fn with_target_score(&self, target_score: TargetScore) -> GameState {
        GameState {
            target_score,
            ..self.reset_match()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: &GameState, moves: &[usize]) -> GameState {
        moves.iter().fold(state.clone(), |s, &i| s.play(i).unwrap().0)
    }

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.scores()[Player::X], 0);
        assert_eq!(state.winner(), None);
        assert_eq!(state.legal_moves().len(), 9);
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_turns_alternate() {
        let state = GameState::default();
        let (next, outcome) = state.play(4).unwrap();

        assert_eq!(outcome.player, Player::X);
        assert_eq!(next.current_player(), Player::O);
        assert_eq!(next.board().get(4), Some(Player::X));
        // Source state untouched
        assert_eq!(state.board().get(4), None);
    }

    #[test]
    fn test_row_win_scores() {
        let state = play_all(&GameState::default(), &[0, 3, 1, 4]);
        let (next, outcome) = state.play(2).unwrap();

        let win = outcome.win.unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line, WinningLine([0, 1, 2]));
        assert_eq!(next.winner(), Some(Player::X));
        assert_eq!(next.winning_line(), Some(WinningLine([0, 1, 2])));
        assert_eq!(next.scores()[Player::X], 1);
        assert!(!outcome.match_won);
        assert!(next.legal_moves().is_empty());
    }

    #[test]
    fn test_move_after_win_rejected() {
        let state = play_all(&GameState::default(), &[0, 3, 1, 4, 2]);
        assert_eq!(
            state.play(8),
            Err(InvalidMoveError::RoundOver { winner: Player::X })
        );
    }

    #[test]
    fn test_reset_round_keeps_scores() {
        let state = play_all(&GameState::default(), &[0, 3, 1, 4, 2]);
        let reset = state.reset_round();

        assert_eq!(*reset.board(), Board::empty());
        assert!(reset.queues()[Player::X].is_empty());
        assert_eq!(reset.current_player(), Player::X);
        assert_eq!(reset.winner(), None);
        assert_eq!(reset.scores()[Player::X], 1);
    }

    #[test]
    fn test_match_won_at_target() {
        let config = MatchConfig::new().with_target_score(TargetScore::new(2).unwrap());
        let mut state = GameState::new(&config);

        for round in 0..2 {
            let (next, outcome) = play_all(&state, &[0, 3, 1, 4]).play(2).unwrap();
            assert_eq!(outcome.match_won, round == 1);
            state = next.reset_round();
        }

        assert_eq!(state.match_winner(), Some(Player::X));
        assert_eq!(
            state.play(0),
            Err(InvalidMoveError::MatchOver { winner: Player::X })
        );

        let fresh = state.reset_match();
        assert_eq!(fresh.match_winner(), None);
        assert_eq!(fresh.scores()[Player::X], 0);
    }

    #[test]
    fn test_config_change_resets_match() {
        let state = play_all(&GameState::default(), &[0, 3, 1, 4, 2]);

        let changed = state.with_difficulty(Difficulty::Hard);
        assert_eq!(changed.difficulty(), Difficulty::Hard);
        assert_eq!(changed.scores()[Player::X], 0);
        assert_eq!(*changed.board(), Board::empty());

        let changed = state.with_mode(GameMode::Single);
        assert_eq!(changed.mode(), GameMode::Single);
        assert!(!changed.is_ai_turn());

        let changed = state.with_target_score(TargetScore::new(9).unwrap());
        assert_eq!(changed.target_score().get(), 9);
        assert_eq!(changed.scores()[Player::X], 0);
    }

    #[test]
    fn test_ai_turn() {
        let config = MatchConfig::new().with_mode(GameMode::Single);
        let state = GameState::new(&config);
        assert!(!state.is_ai_turn());

        let (next, _) = state.play(4).unwrap();
        assert!(next.is_ai_turn());
    }

    #[test]
    fn test_long_game_stays_consistent() {
        // Cycle through cells; evictions keep each side at three marks
        let mut state = GameState::default();
        let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut played = 0;

        for &index in order.iter().cycle().take(60) {
            if state.winner().is_some() {
                state = state.reset_round();
            }
            if let Ok((next, _)) = state.play(index) {
                state = next;
                played += 1;
            }
            assert!(queues_consistent(state.board(), state.queues()));
            for player in Player::ALL {
                assert!(state.queues()[player].len() <= 3);
            }
        }

        assert!(played > 0);
    }

    #[test]
    fn test_state_serde() {
        let state = play_all(&GameState::default(), &[4, 0, 8]);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_state_serde_rejects_broken_window() {
        let state = play_all(&GameState::default(), &[0, 2, 1, 5]);
        let mut json: serde_json::Value = serde_json::to_value(&state).unwrap();

        // Four X marks with a queue to match
        json["board"]["cells"][3] = serde_json::json!("X");
        json["queues"]["data"][0] = serde_json::json!([0, 1, 3, 4]);
        json["board"]["cells"][4] = serde_json::json!("X");
        let err = serde_json::from_value::<GameState>(json.clone()).unwrap_err();
        assert!(err.to_string().contains("more than the limit"), "{err}");

        // Marked cell missing from its owner's queue
        json["queues"]["data"][0] = serde_json::json!([0, 1, 3]);
        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("disagree"), "{err}");
    }

    #[test]
    fn test_state_serde_rejects_unowned_winning_line() {
        let state = play_all(&GameState::default(), &[0, 3, 1, 4]);
        let mut json: serde_json::Value = serde_json::to_value(&state).unwrap();
        json["winner"] = serde_json::json!("X");
        json["winning_line"] = serde_json::json!([0, 1, 2]);

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("winning line"), "{err}");
    }
}
