//! Move-selection policies.
//!
//! Policies are trait-based so the match driver can take any of them:
//! - `HeuristicPolicy`: the tiered win/block/position cascade
//! - `UniformPolicy`: any empty cell, uniformly

use tracing::debug;

use crate::core::{Board, Difficulty, Player, RandomSource};
use crate::error::NoMovesAvailableError;
use crate::rules::check_winner;

/// Cells the positional step prefers: center, then corners.
pub const PREFERRED_CELLS: [usize; 5] = [4, 0, 2, 6, 8];

/// Probability used by both coin flips in the cascade.
const COIN_FLIP: f64 = 0.5;

/// Which step of the cascade produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveReason {
    /// Easy tier's opening coin flip.
    EasyRandom,
    /// Completes one of the AI's lines.
    Win,
    /// Occupies a cell the opponent needs to complete a line.
    Block,
    /// First free cell of `PREFERRED_CELLS`.
    Positional,
    /// Uniform pick among empty cells.
    Random,
}

/// Policy for choosing the AI's next cell.
pub trait MovePolicy: Send + Sync {
    /// Pick an empty cell for `player`.
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, NoMovesAvailableError>;
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl MovePolicy for UniformPolicy {
    fn select_move(
        &self,
        board: &Board,
        _player: Player,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, NoMovesAvailableError> {
        random_empty(board, rng)
    }
}

/// Tiered heuristic policy.
///
/// Steps, each tried only if the previous one did not pick a cell:
/// 1. Easy: half the time, a random cell
/// 2. Medium/Hard: the first cell (ascending) that wins now
/// 3. Medium/Hard: the first cell (ascending) that blocks an opponent win
/// 4. Hard: the first free cell of `PREFERRED_CELLS`
/// 5. Medium: half the time, the same preference
/// 6. A random cell
///
/// Hypothetical placements do not apply eviction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeuristicPolicy {
    pub difficulty: Difficulty,
}

impl HeuristicPolicy {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Pick a cell and report which step chose it.
    pub fn select_move_explained(
        &self,
        board: &Board,
        player: Player,
        rng: &mut dyn RandomSource,
    ) -> Result<(usize, MoveReason), NoMovesAvailableError> {
        if board.is_full() {
            return Err(NoMovesAvailableError);
        }

        let (index, reason) = self.cascade(board, player, rng)?;
        debug!(difficulty = %self.difficulty, %player, index, ?reason, "AI selected move");
        Ok((index, reason))
    }

    fn cascade(
        &self,
        board: &Board,
        player: Player,
        rng: &mut dyn RandomSource,
    ) -> Result<(usize, MoveReason), NoMovesAvailableError> {
        let difficulty = self.difficulty;

        if difficulty == Difficulty::Easy && rng.chance(COIN_FLIP) {
            return Ok((random_empty(board, rng)?, MoveReason::EasyRandom));
        }

        if difficulty.is_tactical() {
            if let Some(index) = winning_cell(board, player) {
                return Ok((index, MoveReason::Win));
            }
            if let Some(index) = winning_cell(board, player.opponent()) {
                return Ok((index, MoveReason::Block));
            }
        }

        let positional = match difficulty {
            Difficulty::Hard => preferred_cell(board),
            Difficulty::Medium if rng.chance(COIN_FLIP) => preferred_cell(board),
            _ => None,
        };
        if let Some(index) = positional {
            return Ok((index, MoveReason::Positional));
        }

        Ok((random_empty(board, rng)?, MoveReason::Random))
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, NoMovesAvailableError> {
        self.select_move_explained(board, player, rng)
            .map(|(index, _)| index)
    }
}

/// First empty cell (ascending) where `player` would complete a line.
#[must_use]
pub fn winning_cell(board: &Board, player: Player) -> Option<usize> {
    board.empty_cells().find(|&index| {
        check_winner(&board.with_mark(index, player)).map(|w| w.player) == Some(player)
    })
}

/// First empty cell of `PREFERRED_CELLS`.
#[must_use]
pub fn preferred_cell(board: &Board) -> Option<usize> {
    PREFERRED_CELLS.into_iter().find(|&index| board.is_empty(index))
}

fn random_empty(board: &Board, rng: &mut dyn RandomSource) -> Result<usize, NoMovesAvailableError> {
    let empty: Vec<usize> = board.empty_cells().collect();
    if empty.is_empty() {
        return Err(NoMovesAvailableError);
    }
    Ok(empty[rng.pick(empty.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed coin flips and picks.
    #[derive(Default)]
    struct Scripted {
        flips: VecDeque<bool>,
        picks: VecDeque<usize>,
    }

    impl Scripted {
        fn new(flips: &[bool], picks: &[usize]) -> Self {
            Self {
                flips: flips.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn chance(&mut self, _probability: f64) -> bool {
            self.flips.pop_front().expect("unexpected coin flip")
        }

        fn pick(&mut self, len: usize) -> usize {
            let pick = self.picks.pop_front().expect("unexpected pick");
            assert!(pick < len);
            pick
        }
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_winning_cell() {
        assert_eq!(winning_cell(&board("OO. XX. ..."), Player::O), Some(2));
        assert_eq!(winning_cell(&board("OO. XX. ..."), Player::X), Some(5));
        assert_eq!(winning_cell(&Board::empty(), Player::O), None);
    }

    #[test]
    fn test_preferred_cell() {
        assert_eq!(preferred_cell(&Board::empty()), Some(4));
        assert_eq!(preferred_cell(&board("X.. .O. ...")), Some(2));
        assert_eq!(preferred_cell(&board("X.O .O. X.X")), None);
    }

    #[test]
    fn test_easy_coin_flip_heads_is_random() {
        let policy = HeuristicPolicy::new(Difficulty::Easy);
        // O could win at 2, but the opening flip short-circuits
        let mut rng = Scripted::new(&[true], &[0]);
        let result = policy.select_move_explained(&board("OO. XX. ..."), Player::O, &mut rng);
        assert_eq!(result, Ok((2, MoveReason::EasyRandom)));

        let mut rng = Scripted::new(&[true], &[3]);
        let result = policy.select_move_explained(&board("OO. XX. ..."), Player::O, &mut rng);
        assert_eq!(result, Ok((7, MoveReason::EasyRandom)));
    }

    #[test]
    fn test_easy_tails_skips_tactics() {
        let policy = HeuristicPolicy::new(Difficulty::Easy);
        let mut rng = Scripted::new(&[false], &[1]);
        let result = policy.select_move_explained(&board("OO. XX. ..."), Player::O, &mut rng);
        assert_eq!(result, Ok((5, MoveReason::Random)));
    }

    #[test]
    fn test_win_before_block() {
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let policy = HeuristicPolicy::new(difficulty);
            let mut rng = Scripted::default();
            let result = policy.select_move_explained(&board("XX. OO. ..."), Player::O, &mut rng);
            assert_eq!(result, Ok((5, MoveReason::Win)));
        }
    }

    #[test]
    fn test_block() {
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let policy = HeuristicPolicy::new(difficulty);
            let mut rng = Scripted::default();
            let result = policy.select_move_explained(&board("XX. .O. ..."), Player::O, &mut rng);
            assert_eq!(result, Ok((2, MoveReason::Block)));
        }
    }

    #[test]
    fn test_hard_positional() {
        let policy = HeuristicPolicy::new(Difficulty::Hard);
        let mut rng = Scripted::default();
        let result = policy.select_move_explained(&board("... .X. ..."), Player::O, &mut rng);
        assert_eq!(result, Ok((0, MoveReason::Positional)));
    }

    #[test]
    fn test_medium_coin_flip() {
        let policy = HeuristicPolicy::new(Difficulty::Medium);

        let mut rng = Scripted::new(&[true], &[]);
        let result = policy.select_move_explained(&Board::empty(), Player::O, &mut rng);
        assert_eq!(result, Ok((4, MoveReason::Positional)));

        let mut rng = Scripted::new(&[false], &[8]);
        let result = policy.select_move_explained(&Board::empty(), Player::O, &mut rng);
        assert_eq!(result, Ok((8, MoveReason::Random)));
    }

    #[test]
    fn test_full_board() {
        let full = board("XOX OXO OXO");
        for difficulty in Difficulty::ALL {
            let mut rng = Scripted::default();
            assert_eq!(
                HeuristicPolicy::new(difficulty).select_move(&full, Player::O, &mut rng),
                Err(NoMovesAvailableError)
            );
        }
        assert_eq!(
            UniformPolicy.select_move(&full, Player::X, &mut Scripted::default()),
            Err(NoMovesAvailableError)
        );
    }

    #[test]
    fn test_uniform_policy() {
        let mut rng = Scripted::new(&[], &[2]);
        let index = UniformPolicy
            .select_move(&board("X.. .O. ..."), Player::X, &mut rng)
            .unwrap();
        assert_eq!(index, 3);
    }
}
