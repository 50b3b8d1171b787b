//! Conversions shared by the Python wrappers.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Player;
use crate::error::MancalaError;

/// Engine errors surface as `ValueError` with the engine's message.
pub(crate) fn engine_error(err: MancalaError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Players are plain integers (1 or 2) on the Python side.
pub(crate) fn player_from_number(number: u8) -> PyResult<Player> {
    Player::from_number(number).ok_or_else(|| {
        PyErr::new::<PyValueError, _>(format!("player must be 1 or 2, got {}", number))
    })
}
