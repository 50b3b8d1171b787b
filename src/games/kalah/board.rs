//! Kalah board state and rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    PitCoord, PitId, Player, PlayerMap, BOARD_SIZE, INITIAL_STONES, PITS_PER_ROW, TOTAL_STONES,
};
use crate::error::{MancalaError, Result};
use crate::rules::{GameStatus, MoveResult, MoveType, RulesEngine};

use super::sowing::sow;

/// A Kalah game in progress: 14 pit counters, the player to move and the
/// game status.
///
/// The number of stones on the board never changes during a game; moves and
/// the end-of-game sweep only relocate them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pits: [u32; BOARD_SIZE],
    current_player: Player,
    status: GameStatus,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    pits: [u32; BOARD_SIZE],
    current_player: Player,
    status: GameStatus,
}

impl TryFrom<RawBoard> for Board {
    type Error = MancalaError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Self::check_total(&raw.pits)?;
        Ok(Self {
            pits: raw.pits,
            current_player: raw.current_player,
            status: raw.status,
        })
    }
}

impl Board {
    /// Create a board ready for a new game.
    pub fn new() -> Self {
        let mut board = Self {
            pits: [0; BOARD_SIZE],
            current_player: Player::One,
            status: GameStatus::InProgress,
        };
        board.reset();
        board
    }

    /// Create an in-progress board from explicit pit counts.
    ///
    /// `pits` uses the linear layout (index 0 and 7 are the stores) and must
    /// hold exactly [`TOTAL_STONES`].
    ///
    /// ```
    /// use mancala_engine::core::Player;
    /// use mancala_engine::games::kalah::Board;
    ///
    /// let pits = [10, 0, 0, 0, 0, 0, 0, 14, 4, 4, 4, 4, 4, 4];
    /// let board = Board::from_pits(pits, Player::Two).unwrap();
    /// assert_eq!(board.side_stones(Player::One), 0);
    ///
    /// assert!(Board::from_pits([1; 14], Player::One).is_err());
    /// ```
    pub fn from_pits(pits: [u32; BOARD_SIZE], current_player: Player) -> Result<Self> {
        Self::check_total(&pits)?;
        Ok(Self {
            pits,
            current_player,
            status: GameStatus::InProgress,
        })
    }

    /// Counts are summed as `u64` so no `u32` input can wrap around to 48.
    fn check_total(pits: &[u32; BOARD_SIZE]) -> Result<()> {
        let total: u64 = pits.iter().map(|&stones| u64::from(stones)).sum();
        if total != u64::from(TOTAL_STONES) {
            return Err(MancalaError::InvalidPosition {
                total,
                expected: TOTAL_STONES,
            });
        }
        Ok(())
    }

    /// All pit counts in linear order.
    #[must_use]
    pub fn pits(&self) -> &[u32; BOARD_SIZE] {
        &self.pits
    }

    /// Stones left in a player's six houses.
    #[must_use]
    pub fn side_stones(&self, player: Player) -> u32 {
        PitId::houses(player).map(|pit| self.stones(pit)).sum()
    }

    /// Stones on the whole board.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Both stores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|player| self.stones(PitId::store(player)))
    }

    /// Reject moves once the game has ended.
    fn ensure_in_progress(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(MancalaError::MoveAfterGameOver {
                status: self.status,
            });
        }
        Ok(())
    }

    /// Capture / free-turn resolution for the pit the last stone landed in.
    fn resolve_landing(&mut self, last: PitId) -> MoveResult {
        if last.is_store() {
            return MoveResult::FreeTurn;
        }

        let mover = self.current_player;
        if !last.is_house_of(mover) || self.stones(last) != 1 {
            return MoveResult::Normal;
        }
        let Some(opposite) = last.opposite() else {
            return MoveResult::Normal;
        };
        if self.stones(opposite) == 0 {
            return MoveResult::Normal;
        }

        let captured = self.pits[last.index()] + self.pits[opposite.index()];
        self.pits[last.index()] = 0;
        self.pits[opposite.index()] = 0;
        self.pits[PitId::store(mover).index()] += captured;
        debug!(%mover, %last, %opposite, captured, "capture");
        MoveResult::Capture
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for Board {
    fn reset(&mut self) {
        for (index, pit) in self.pits.iter_mut().enumerate() {
            *pit = if index % PITS_PER_ROW == 0 {
                0
            } else {
                INITIAL_STONES
            };
        }
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
    }

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn stones(&self, pit: PitId) -> u32 {
        self.pits[pit.index()]
    }

    fn classify_move(&self, row: usize, col: usize) -> Result<MoveType> {
        let pit = PitCoord::new(row, col)?.pit();
        self.ensure_in_progress()?;

        let classification = if pit.is_store() {
            MoveType::WrongPlayer
        } else if self.stones(pit) == 0 {
            MoveType::EmptyPit
        } else if pit.owner() == self.current_player {
            MoveType::Valid
        } else {
            MoveType::WrongPlayer
        };
        Ok(classification)
    }

    fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult> {
        let reason = self.classify_move(row, col)?;
        if reason != MoveType::Valid {
            return Err(MancalaError::IllegalMove { row, col, reason });
        }

        let mover = self.current_player;
        let source = PitCoord::new(row, col)?.pit();
        let sowing = sow(&mut self.pits, source, mover);
        let result = self.resolve_landing(sowing.last);
        if result.switches_player() {
            self.current_player = mover.other();
        }

        debug!(
            %mover,
            %source,
            stones = sowing.sown,
            last = %sowing.last,
            skipped = sowing.skipped,
            %result,
            "move applied"
        );
        debug_assert_eq!(self.total_stones(), TOTAL_STONES);
        Ok(result)
    }

    fn check_game_over(&mut self) -> GameStatus {
        let remaining = PlayerMap::new(|player| self.side_stones(player));
        if remaining[Player::One] != 0 && remaining[Player::Two] != 0 {
            self.status = GameStatus::InProgress;
            return self.status;
        }

        for player in Player::all() {
            for pit in PitId::houses(player) {
                self.pits[pit.index()] = 0;
            }
            self.pits[PitId::store(player).index()] += remaining[player];
        }

        let scores = self.scores();
        let status = GameStatus::from_scores(scores[Player::One], scores[Player::Two]);
        if status != self.status {
            info!(
                %status,
                player_one = scores[Player::One],
                player_two = scores[Player::Two],
                "game over"
            );
        }
        debug!(
            swept_one = remaining[Player::One],
            swept_two = remaining[Player::Two],
            "end-of-game sweep"
        );
        self.status = status;
        status
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\t\tMancala Game")?;

        write!(f, "    ")?;
        for pit in PitId::houses(Player::One) {
            write!(f, "{:2}:{:2}  ", pit.index(), self.stones(pit))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Store 1:{:2}                            Store 2:{:2}",
            self.stones(PitId::STORE_ONE),
            self.stones(PitId::STORE_TWO)
        )?;

        write!(f, "    ")?;
        for pit in PitId::houses(Player::Two).rev() {
            write!(f, "{:2}:{:2}  ", pit.index(), self.stones(pit))?;
        }
        writeln!(f)
    }
}
