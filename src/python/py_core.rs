//! Pure-function bindings for Python.
//!
//! Boards cross the boundary in their text form (`"XO. .X. ..."`).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai;
use crate::core::{Board, Difficulty, GameRng};
use crate::rules;

/// Convert any engine error into a Python `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn parse_board(board: &str) -> PyResult<Board> {
    board.parse::<Board>().map_err(value_error)
}

/// Return `(symbol, line)` for the first completed line, or None.
#[pyfunction]
pub fn check_winner(board: &str) -> PyResult<Option<(String, Vec<usize>)>> {
    let board = parse_board(board)?;
    Ok(rules::check_winner(&board)
        .map(|win| (win.player.to_string(), win.line.cells().to_vec())))
}

/// Choose a cell for the AI (playing O).
///
/// Raises ValueError on a full board or an unknown difficulty.
#[pyfunction]
#[pyo3(signature = (board, difficulty = "medium", seed = 42))]
pub fn get_ai_move(board: &str, difficulty: &str, seed: u64) -> PyResult<usize> {
    let board = parse_board(board)?;
    let difficulty: Difficulty = difficulty.parse().map_err(value_error)?;
    let mut rng = GameRng::new(seed);
    ai::get_ai_move(&board, difficulty, &mut rng).map_err(value_error)
}
