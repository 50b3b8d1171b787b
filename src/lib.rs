//! # mancala-engine
//!
//! Rules engine for two-player Mancala, Kalah variant.
//!
//! ## Design Principles
//!
//! 1. **One Engine**: Every front-end (console, Python, anything else) drives
//!    the same `RulesEngine`. Front-ends contain no rules.
//!
//! 2. **Caller Keeps Control**: A free turn is reported as
//!    `MoveResult::FreeTurn`; the caller prompts the same player again.
//!
//! 3. **Contract Violations Are Errors**: Off-board coordinates, illegal
//!    selections and moves after the game ended return `MancalaError` and
//!    leave the board untouched.
//!
//! ## Modules
//!
//! - `core`: Players and board geometry
//! - `rules`: `RulesEngine` trait, move and status types
//! - `games`: The Kalah `Board`
//! - `shell`: Text front-end
//! - `error`: Structured error types
//!
//! ## Example
//!
//! ```
//! use mancala_engine::{Board, GameStatus, MoveResult, Player, RulesEngine};
//!
//! let mut board = Board::new();
//! assert_eq!(board.apply_move(0, 4).unwrap(), MoveResult::FreeTurn);
//! assert_eq!(board.current_player(), Player::One);
//! assert_eq!(board.check_game_over(), GameStatus::InProgress);
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod shell;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PitCoord, PitId, Player, PlayerMap,
    BOARD_SIZE, HOUSES_PER_SIDE, INITIAL_STONES, PITS_PER_ROW, ROWS, TOTAL_STONES,
};

pub use crate::error::{MancalaError, Result};

pub use crate::rules::{GameStatus, MoveList, MoveResult, MoveType, RulesEngine};

pub use crate::games::kalah::Board;

pub use crate::shell::ConsoleShell;
