//! Rules engine trait and move/status vocabulary.
//!
//! `RulesEngine` is the only surface front-ends use. `games::kalah::Board`
//! is the implementation.

pub mod engine;

pub use engine::{GameStatus, MoveList, MoveResult, MoveType, RulesEngine};
