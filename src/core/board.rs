//! The 3×3 board.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`; every engine operation takes a board by reference and
//! returns a new one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Player;
use crate::error::ParseBoardError;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Side length of the board.
pub const BOARD_WIDTH: usize = 3;

/// A cell is either empty or holds a player's mark.
pub type Cell = Option<Player>;

/// Fixed 9-cell board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Raw cells in index order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Get a cell. Out-of-range indices read as `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Whether `index` is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index].is_none()
    }

    /// Whether every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// Number of marks a player has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Copy of this board with `index` marked for `player`.
    ///
    /// Used for hypothetical placements; no eviction is applied.
    ///
    /// Panics if `index` is not below `BOARD_SIZE`. Checked placement goes
    /// through `rules::apply_move`.
    #[must_use]
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        next.set(index, Some(player));
        next
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse `X`, `O` (either case) and `.`, `_`, `-` for empty.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);

        for c in s.chars() {
            if c.is_whitespace() || c == '|' {
                continue;
            }
            let cell = match c {
                '.' | '_' | '-' => None,
                other => Some(Player::from_symbol(other).ok_or(ParseBoardError::BadCell(other))?),
            };
            cells.push(cell);
        }

        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| ParseBoardError::WrongLength(v.len()))?;

        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = chunk
                .iter()
                .map(|c| c.map_or('.', Player::symbol))
                .collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
