//! Rules engine trait for Kalah implementations.
//!
//! Front-ends talk to the engine only through `RulesEngine`:
//! - What pits hold (`pit_value`)
//! - Whether a selection is legal (`classify_move`)
//! - How a move changes the board (`apply_move`)
//! - When the game is over (`check_game_over`)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PitCoord, PitId, Player, HOUSES_PER_SIDE};
use crate::error::Result;

/// Legality of a candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// A non-empty house of the current player.
    Valid,
    /// A house of either player holding no stones.
    EmptyPit,
    /// The opponent's house, or either store.
    WrongPlayer,
}

impl MoveType {
    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveType::Valid => "valid",
            MoveType::EmptyPit => "empty_pit",
            MoveType::WrongPlayer => "wrong_player",
        }
    }
}

impl std::fmt::Display for MoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MoveType::Valid => "valid",
            MoveType::EmptyPit => "empty pit",
            MoveType::WrongPlayer => "wrong player",
        })
    }
}

/// Outcome of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Last stone landed without side effects; the turn passes.
    Normal,
    /// Last stone captured the opposite house; the turn passes.
    Capture,
    /// Last stone landed in a store; the same player moves again.
    FreeTurn,
}

impl MoveResult {
    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveResult::Normal => "normal",
            MoveResult::Capture => "capture",
            MoveResult::FreeTurn => "free_turn",
        }
    }

    /// Whether the turn passes to the opponent after this result.
    #[must_use]
    pub const fn switches_player(self) -> bool {
        !matches!(self, MoveResult::FreeTurn)
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MoveResult::Normal => "normal",
            MoveResult::Capture => "capture",
            MoveResult::FreeTurn => "free turn",
        })
    }
}

/// Status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Player1Won,
    Player2Won,
    Tied,
}

impl GameStatus {
    /// Status for final store totals.
    #[must_use]
    pub fn from_scores(store_one: u32, store_two: u32) -> Self {
        match store_one.cmp(&store_two) {
            std::cmp::Ordering::Greater => GameStatus::Player1Won,
            std::cmp::Ordering::Less => GameStatus::Player2Won,
            std::cmp::Ordering::Equal => GameStatus::Tied,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Player1Won => Some(Player::One),
            GameStatus::Player2Won => Some(Player::Two),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Player1Won => "player1_won",
            GameStatus::Player2Won => "player2_won",
            GameStatus::Tied => "tied",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Player1Won => "player 1 won",
            GameStatus::Player2Won => "player 2 won",
            GameStatus::Tied => "tied",
        })
    }
}

/// Legal move list; a player never has more than six.
pub type MoveList = SmallVec<[PitCoord; HOUSES_PER_SIDE]>;

/// Rules engine trait.
///
/// Pits are addressed by `(row, col)` as described in [`crate::core::pit`].
///
/// ## Implementation Notes
///
/// - `classify_move` and `apply_move` must reject calls once the status is
///   terminal
/// - `apply_move` must leave the board untouched when it returns an error
/// - `check_game_over` settles the board (the end-of-game sweep) and should
///   be called once after every applied move
pub trait RulesEngine {
    /// Start a new game: seed every house, empty both stores, Player One to move.
    fn reset(&mut self);

    /// The player to move.
    fn current_player(&self) -> Player;

    /// Status as of the last `check_game_over`.
    fn status(&self) -> GameStatus;

    /// Stones in one pit.
    fn stones(&self, pit: PitId) -> u32;

    /// Classify a candidate move for the current player.
    fn classify_move(&self, row: usize, col: usize) -> Result<MoveType>;

    /// Sow from the selected house and resolve capture / free turn.
    fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult>;

    /// Detect the end of the game, sweeping remaining stones if it has ended.
    fn check_game_over(&mut self) -> GameStatus;

    // === Convenience Methods ===

    /// Stones at a row/column position.
    fn pit_value(&self, row: usize, col: usize) -> Result<u32> {
        Ok(self.stones(PitCoord::new(row, col)?.pit()))
    }

    /// Whether the game has ended.
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Stones in a player's store.
    fn score(&self, player: Player) -> u32 {
        self.stones(PitId::store(player))
    }

    /// Enumerate every valid selection for the current player.
    ///
    /// Empty once the game is over.
    fn legal_moves(&self) -> MoveList {
        PitId::houses(self.current_player())
            .map(PitId::coord)
            .filter(|c| matches!(self.classify_move(c.row(), c.col()), Ok(MoveType::Valid)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_status_from_scores() {
        assert_eq!(GameStatus::from_scores(30, 18), GameStatus::Player1Won);
        assert_eq!(GameStatus::from_scores(18, 30), GameStatus::Player2Won);
        assert_eq!(GameStatus::from_scores(24, 24), GameStatus::Tied);
    }

    #[test]
    fn test_game_status_winner() {
        assert_eq!(GameStatus::Player1Won.winner(), Some(Player::One));
        assert_eq!(GameStatus::Player2Won.winner(), Some(Player::Two));
        assert_eq!(GameStatus::Tied.winner(), None);
        assert_eq!(GameStatus::InProgress.winner(), None);
    }

    #[test]
    fn test_game_status_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Player1Won.is_terminal());
        assert!(GameStatus::Player2Won.is_terminal());
        assert!(GameStatus::Tied.is_terminal());
        assert_eq!(GameStatus::default(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_result_switches_player() {
        assert!(MoveResult::Normal.switches_player());
        assert!(MoveResult::Capture.switches_player());
        assert!(!MoveResult::FreeTurn.switches_player());
    }

    #[test]
    fn test_names() {
        assert_eq!(MoveType::EmptyPit.as_str(), "empty_pit");
        assert_eq!(MoveResult::FreeTurn.as_str(), "free_turn");
        assert_eq!(GameStatus::Player2Won.as_str(), "player2_won");
        assert_eq!(format!("{}", MoveType::WrongPlayer), "wrong player");
    }
}
