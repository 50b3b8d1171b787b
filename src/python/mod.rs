//! Python bindings for the Kalah rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import mancala_engine as mancala
//!
//! board = mancala.Board()
//! assert board.classify_move(0, 4) == "valid"
//! assert board.apply_move(0, 4) == "free_turn"
//! status = board.check_game_over()   # "in_progress"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_games::*;

use crate::core::{BOARD_SIZE, INITIAL_STONES, TOTAL_STONES};

/// mancala_engine: Kalah rules for Python front-ends.
#[pymodule]
fn mancala_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;

    m.add("BOARD_SIZE", BOARD_SIZE)?;
    m.add("INITIAL_STONES", INITIAL_STONES)?;
    m.add("TOTAL_STONES", TOTAL_STONES)?;

    Ok(())
}
