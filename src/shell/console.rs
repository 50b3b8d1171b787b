//! Line-oriented text front-end.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::{PitCoord, PitId, Player, HOUSES_PER_SIDE};
use crate::rules::{GameStatus, MoveResult, MoveType, RulesEngine};

const INVALID_MOVE: &str = "Invalid move. Try again.";
const EMPTY_PIT: &str = "Pit is empty, try another one with marbles in it.";

/// Plays games on a text stream, one pit number per input line.
///
/// Pit numbers are linear indices (1-6 for Player 1, 8-13 for Player 2).
/// Every selection goes through [`RulesEngine::classify_move`] before it is
/// applied, and [`RulesEngine::check_game_over`] runs after every move.
///
/// ```
/// use std::io::Cursor;
/// use mancala_engine::games::kalah::Board;
/// use mancala_engine::shell::ConsoleShell;
///
/// let mut shell = ConsoleShell::new(Board::new(), Cursor::new("4\n"), Vec::new());
/// shell.run().unwrap();
///
/// let (_, output) = shell.into_parts();
/// assert!(String::from_utf8(output).unwrap().contains("Free turn for Player 1!"));
/// ```
pub struct ConsoleShell<E, R, W> {
    engine: E,
    input: R,
    output: W,
}

impl<E, R, W> ConsoleShell<E, R, W>
where
    E: RulesEngine + Display,
    R: BufRead,
    W: Write,
{
    pub fn new(engine: E, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consume the shell, returning the engine and the output sink.
    pub fn into_parts(self) -> (E, W) {
        (self.engine, self.output)
    }

    /// Play games until the player declines a restart or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(status) = self.play_game()? else {
                debug!("input closed mid-game");
                return Ok(());
            };
            self.show_final_score(status)?;
            if !self.ask_restart()? {
                return Ok(());
            }
            self.engine.reset();
        }
    }

    /// Play one game to its end. `None` if input closed first.
    fn play_game(&mut self) -> io::Result<Option<GameStatus>> {
        let mut status = self.engine.check_game_over();
        while !status.is_terminal() {
            write!(self.output, "{}", self.engine)?;

            let player = self.engine.current_player();
            let Some(coord) = self.read_move(player)? else {
                return Ok(None);
            };

            let before = self.engine.score(player);
            match self.engine.apply_move(coord.row(), coord.col()) {
                Ok(MoveResult::FreeTurn) => {
                    writeln!(self.output, "\nFree turn for {player}!")?;
                }
                Ok(MoveResult::Capture) => {
                    let captured = self.engine.score(player) - before;
                    writeln!(self.output, "\n{player} captured {captured} stones!")?;
                }
                Ok(MoveResult::Normal) => {}
                Err(err) => {
                    debug!(error = %err, "move rejected after classification");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                }
            }

            status = self.engine.check_game_over();
        }
        Ok(Some(status))
    }

    /// Prompt until the current player picks a valid house.
    fn read_move(&mut self, player: Player) -> io::Result<Option<PitCoord>> {
        let first = PitId::store(player).index() + 1;
        let last = first + HOUSES_PER_SIDE - 1;
        writeln!(
            self.output,
            "\n{player}'s turn. Enter a house number from {first} to {last}:"
        )?;

        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };

            let coord = match line.parse::<usize>() {
                Ok(number) => PitId::try_from(number).map(PitId::coord),
                Err(_) => {
                    debug!(input = %line, "unparsable selection");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                    continue;
                }
            };

            let classification =
                coord.and_then(|c| self.engine.classify_move(c.row(), c.col()).map(|t| (c, t)));
            match classification {
                Ok((coord, MoveType::Valid)) => return Ok(Some(coord)),
                Ok((_, MoveType::EmptyPit)) => writeln!(self.output, "{EMPTY_PIT}")?,
                Ok((_, MoveType::WrongPlayer)) => writeln!(self.output, "{INVALID_MOVE}")?,
                Err(err) => {
                    debug!(error = %err, "rejected selection");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                }
            }
        }
    }

    fn show_final_score(&mut self, status: GameStatus) -> io::Result<()> {
        writeln!(self.output, "Game Over!")?;
        writeln!(
            self.output,
            "\nPlayer 1 Score: {}\nPlayer 2 Score: {}",
            self.engine.score(Player::One),
            self.engine.score(Player::Two)
        )?;
        writeln!(self.output, "\n{}", outcome_message(status))?;
        write!(self.output, "{}", self.engine)
    }

    fn ask_restart(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Restart the game? (Y/N)")?;
        Ok(self
            .next_line()?
            .is_some_and(|answer| answer.starts_with(['y', 'Y'])))
    }

    /// Next non-blank input line, trimmed. `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }
}

/// Text shown for a finished game.
pub fn outcome_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Player1Won => "Player 1 is the winner!",
        GameStatus::Player2Won => "Player 2 is the winner!",
        GameStatus::Tied => "Tied game!",
        GameStatus::InProgress => "Game in progress.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::kalah::Board;
    use std::io::Cursor;

    fn play(board: Board, input: &str) -> (Board, String) {
        let mut shell = ConsoleShell::new(board, Cursor::new(input.to_string()), Vec::new());
        shell.run().unwrap();
        let (board, output) = shell.into_parts();
        (board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameStatus::Player1Won), "Player 1 is the winner!");
        assert_eq!(outcome_message(GameStatus::Player2Won), "Player 2 is the winner!");
        assert_eq!(outcome_message(GameStatus::Tied), "Tied game!");
    }

    #[test]
    fn test_prompt_ranges() {
        let (_, output) = play(Board::new(), "1\n");
        assert!(output.contains("Player 1's turn. Enter a house number from 1 to 6:"));
        assert!(output.contains("Player 2's turn. Enter a house number from 8 to 13:"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let (board, _) = play(Board::new(), "\n   \n1\n");
        assert_eq!(board.current_player(), Player::Two);
    }
}
