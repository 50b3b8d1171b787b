//! Structured error types.
//!
//! Every error is a caller-contract violation. An operation that fails leaves
//! the board exactly as it was.

use crate::rules::{GameStatus, MoveType};

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, MancalaError>;

/// Errors reported by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MancalaError {
    #[error("pit ({row}, {col}) is off the board (rows 0-1, columns 0-6)")]
    InvalidPitIndex { row: usize, col: usize },

    #[error("pit number {pit} is off the board (0-13)")]
    InvalidPitNumber { pit: usize },

    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: MoveType,
    },

    #[error("no moves are accepted once the game is over ({status})")]
    MoveAfterGameOver { status: GameStatus },

    #[error("position holds {total} stones, expected {expected}")]
    InvalidPosition { total: u64, expected: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pit_index_display() {
        let err = MancalaError::InvalidPitIndex { row: 0, col: 9 };
        assert_eq!(
            err.to_string(),
            "pit (0, 9) is off the board (rows 0-1, columns 0-6)"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = MancalaError::IllegalMove {
            row: 1,
            col: 6,
            reason: MoveType::WrongPlayer,
        };
        assert_eq!(err.to_string(), "illegal move at (1, 6): wrong player");
    }

    #[test]
    fn test_move_after_game_over_display() {
        let err = MancalaError::MoveAfterGameOver {
            status: GameStatus::Tied,
        };
        assert_eq!(
            err.to_string(),
            "no moves are accepted once the game is over (tied)"
        );
    }

    #[test]
    fn test_invalid_position_display() {
        let err = MancalaError::InvalidPosition {
            total: 50,
            expected: 48,
        };
        assert_eq!(err.to_string(), "position holds 50 stones, expected 48");
    }
}
