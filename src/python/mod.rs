//! Python bindings for the sliding tic-tac-toe engine.
//!
//! Lets a Python front end drive a match and call the pure functions.
//!
//! # Quick Start
//!
//! ```python
//! import sliding_tac_toe as stt
//!
//! game = stt.Match(mode="single", difficulty="hard")
//! game.play(4, now_ms=0)
//!
//! # The AI answers once its delay has passed
//! events = game.tick(now_ms=500)
//! print(game.board, game.scores)
//!
//! stt.check_winner("XXX OO. ...")  # ('X', [0, 1, 2])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_match;

pub use py_core::*;
pub use py_match::*;

/// sliding_tac_toe: tic-tac-toe with a three-mark sliding window.
#[pymodule]
fn sliding_tac_toe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatch>()?;

    m.add_function(wrap_pyfunction!(check_winner, m)?)?;
    m.add_function(wrap_pyfunction!(get_ai_move, m)?)?;

    Ok(())
}
