//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Player, BOARD_SIZE};
use crate::games::kalah::Board;
use crate::rules::RulesEngine;

use super::py_core::{engine_error, player_from_number};

/// Python wrapper for the Kalah board.
///
/// Moves and results use the same row/column addressing as the Rust engine.
/// Enum values come back as snake_case strings.
#[pyclass(name = "Board")]
#[derive(Clone)]
pub struct PyBoard {
    board: Board,
}

#[pymethods]
impl PyBoard {
    /// Create a board.
    ///
    /// # Arguments
    /// - pits: optional 14 pit counts in linear order (stores at 0 and 7)
    /// - current_player: player to move when `pits` is given (1 or 2)
    #[new]
    #[pyo3(signature = (pits = None, current_player = 1))]
    fn new(pits: Option<Vec<u32>>, current_player: u8) -> PyResult<Self> {
        let Some(pits) = pits else {
            return Ok(Self {
                board: Board::new(),
            });
        };

        let len = pits.len();
        let pits: [u32; BOARD_SIZE] = pits.try_into().map_err(|_| {
            PyErr::new::<PyValueError, _>(format!(
                "expected {} pit counts, got {}",
                BOARD_SIZE, len
            ))
        })?;
        let player = player_from_number(current_player)?;
        let board = Board::from_pits(pits, player).map_err(engine_error)?;
        Ok(Self { board })
    }

    /// Start a new game.
    fn reset(&mut self) {
        self.board.reset();
    }

    /// Stones at (row, col).
    fn pit_value(&self, row: usize, col: usize) -> PyResult<u32> {
        self.board.pit_value(row, col).map_err(engine_error)
    }

    /// "valid", "empty_pit" or "wrong_player".
    fn classify_move(&self, row: usize, col: usize) -> PyResult<&'static str> {
        self.board
            .classify_move(row, col)
            .map(|t| t.as_str())
            .map_err(engine_error)
    }

    /// Apply a move; "normal", "capture" or "free_turn".
    fn apply_move(&mut self, row: usize, col: usize) -> PyResult<&'static str> {
        self.board
            .apply_move(row, col)
            .map(|r| r.as_str())
            .map_err(engine_error)
    }

    /// Settle the board if a side is empty; returns the status name.
    fn check_game_over(&mut self) -> &'static str {
        self.board.check_game_over().as_str()
    }

    /// Valid (row, col) selections for the current player.
    fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.board
            .legal_moves()
            .into_iter()
            .map(|c| (c.row(), c.col()))
            .collect()
    }

    /// Player to move (1 or 2).
    #[getter]
    fn current_player(&self) -> u8 {
        self.board.current_player().number()
    }

    /// Status name as of the last `check_game_over`.
    #[getter]
    fn status(&self) -> &'static str {
        self.board.status().as_str()
    }

    /// Store totals as (player 1, player 2).
    fn scores(&self) -> (u32, u32) {
        let scores = self.board.scores();
        (scores[Player::One], scores[Player::Two])
    }

    /// All 14 pit counts in linear order.
    fn pits(&self) -> Vec<u32> {
        self.board.pits().to_vec()
    }

    /// Copy the board for look-ahead.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let (one, two) = self.scores();
        format!(
            "Board(current_player={}, status={}, scores=({}, {}))",
            self.board.current_player().number(),
            self.board.status().as_str(),
            one,
            two
        )
    }

    fn __str__(&self) -> String {
        self.board.to_string()
    }
}
