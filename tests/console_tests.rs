//! Console front-end integration tests, driven by scripted input.

use std::io::Cursor;

use mancala_engine::core::Player;
use mancala_engine::games::kalah::Board;
use mancala_engine::rules::{GameStatus, RulesEngine};
use mancala_engine::shell::ConsoleShell;

fn play(board: Board, input: &str) -> (Board, String) {
    let mut shell = ConsoleShell::new(board, Cursor::new(input.to_string()), Vec::new());
    shell.run().unwrap();
    let (board, output) = shell.into_parts();
    (board, String::from_utf8(output).unwrap())
}

// =============================================================================
// Input Validation
// =============================================================================

/// Picking a house emptied by the previous move asks for another one.
#[test]
fn test_empty_pit_message() {
    let (board, output) = play(Board::new(), "4\n4\n1\n");

    assert!(output.contains("Free turn for Player 1!"));
    assert!(output.contains("Pit is empty, try another one with marbles in it."));
    assert_eq!(board.current_player(), Player::Two);
}

/// Opponent houses, stores, junk and off-board numbers are all rejected.
#[test]
fn test_invalid_selections() {
    let (board, output) = play(Board::new(), "8\n0\n7\nabc\n99\n-1\n");

    assert_eq!(output.matches("Invalid move. Try again.").count(), 6);
    assert_eq!(board, Board::new());
}

/// The board is drawn before each turn.
#[test]
fn test_board_drawn_each_turn() {
    let (_, output) = play(Board::new(), "1\n");

    assert_eq!(output.matches("Mancala Game").count(), 2);
    assert!(output.contains("Store 1: 1"));
}

// =============================================================================
// Game End
// =============================================================================

/// A capture that empties Player One's side ends the game.
#[test]
fn test_capture_then_game_over() {
    let pits = [10, 0, 0, 0, 0, 0, 1, 14, 4, 4, 4, 4, 4, 3];
    let board = Board::from_pits(pits, Player::One).unwrap();

    let (board, output) = play(board, "6\nn\n");

    assert!(output.contains("Player 1 captured 5 stones!"));
    assert!(output.contains("Game Over!"));
    assert!(output.contains("Player 1 Score: 15"));
    assert!(output.contains("Player 2 Score: 33"));
    assert!(output.contains("Player 2 is the winner!"));
    assert!(output.contains("Restart the game? (Y/N)"));
    assert_eq!(board.status(), GameStatus::Player2Won);
}

/// A board that is already finished goes straight to the final score.
#[test]
fn test_tied_game_message() {
    let pits = [24, 0, 0, 0, 0, 0, 0, 20, 1, 1, 1, 1, 0, 0];
    let board = Board::from_pits(pits, Player::Two).unwrap();

    let (board, output) = play(board, "N\n");

    assert!(output.contains("Tied game!"));
    assert!(!output.contains("turn. Enter a house number"));
    assert_eq!(board.status(), GameStatus::Tied);
}

/// Answering yes starts a fresh game with Player One to move.
#[test]
fn test_restart() {
    let pits = [30, 0, 0, 0, 0, 0, 0, 18, 0, 0, 0, 0, 0, 0];
    let board = Board::from_pits(pits, Player::Two).unwrap();

    let (board, output) = play(board, "y\n");

    assert!(output.contains("Player 1 is the winner!"));
    assert!(output.contains("Player 1's turn. Enter a house number from 1 to 6:"));
    assert_eq!(board, Board::new());
}

/// Input ending at the restart prompt counts as declining.
#[test]
fn test_eof_at_restart_prompt() {
    let pits = [30, 0, 0, 0, 0, 0, 0, 18, 0, 0, 0, 0, 0, 0];
    let board = Board::from_pits(pits, Player::One).unwrap();

    let (board, output) = play(board, "");

    assert!(output.ends_with("Restart the game? (Y/N)\n"));
    assert!(board.is_terminal());
}
