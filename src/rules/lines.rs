//! Winning lines and win detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Three cells that win when they share a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    /// The three cell indices.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` is part of this line.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The player holding all three cells, if any.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let first = board.get(a)?;
        (board.get(b) == Some(first) && board.get(c) == Some(first)).then_some(first)
    }
}

/// All 8 lines in scan order: rows top-to-bottom, columns left-to-right,
/// main diagonal, anti-diagonal.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// A completed line and the player holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub line: WinningLine,
}

/// Find the first completed line in scan order.
///
/// When several lines are complete at once the earliest one is reported.
///
/// ```
/// use sliding_tac_toe::core::{Board, Player};
/// use sliding_tac_toe::rules::{check_winner, WinningLine};
///
/// let board: Board = "XXX OO. ...".parse().unwrap();
/// let win = check_winner(&board).unwrap();
///
/// assert_eq!(win.player, Player::X);
/// assert_eq!(win.line, WinningLine([0, 1, 2]));
/// ```
#[must_use]
pub fn check_winner(board: &Board) -> Option<Win> {
    WINNING_LINES
        .iter()
        .find_map(|&line| line.owner(board).map(|player| Win { player, line }))
}

/// Every completed line, in scan order.
#[must_use]
pub fn completed_lines(board: &Board) -> Vec<Win> {
    WINNING_LINES
        .iter()
        .filter_map(|&line| line.owner(board).map(|player| Win { player, line }))
        .collect()
}
