//! Board geometry: pit identifiers and row/column addressing.
//!
//! ## Linear layout
//!
//! The board is 14 pits in a ring, indexed 0..14:
//! - `0`: Player One's store
//! - `1..=6`: Player One's houses
//! - `7`: Player Two's store
//! - `8..=13`: Player Two's houses
//!
//! Sowing walks the ring in decreasing index order, wrapping from 0 to 13.
//!
//! ## Row/column layout
//!
//! Front-ends address pits as a 2×7 grid. Row 0 is linear 0..=6 left to
//! right; row 1 is linear 13..=7, so `(1, 6)` is Player Two's store:
//!
//! ```text
//!  row 0:  [ 0][ 1][ 2][ 3][ 4][ 5][ 6]
//!  row 1:      [13][12][11][10][ 9][ 8][ 7]
//! ```
//!
//! ```
//! use mancala_engine::core::{PitCoord, PitId};
//!
//! let coord = PitCoord::new(1, 6).unwrap();
//! assert_eq!(coord.pit(), PitId::STORE_TWO);
//! assert_eq!(PitId::STORE_TWO.coord(), coord);
//! ```

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::{MancalaError, Result};

/// Total pits on the board, stores included.
pub const BOARD_SIZE: usize = 14;

/// Rows in the row/column addressing scheme.
pub const ROWS: usize = 2;

/// Pits per row, one store plus six houses.
pub const PITS_PER_ROW: usize = 7;

/// Playable houses per player.
pub const HOUSES_PER_SIDE: usize = 6;

/// Stones seeded into every house at the start of a game.
pub const INITIAL_STONES: u32 = 4;

/// Stones in play for the whole game.
pub const TOTAL_STONES: u32 = (2 * HOUSES_PER_SIDE) as u32 * INITIAL_STONES;

/// Linear pit index, always in `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PitId(u8);

impl PitId {
    /// Player One's store.
    pub const STORE_ONE: PitId = PitId(0);

    /// Player Two's store.
    pub const STORE_TWO: PitId = PitId(PITS_PER_ROW as u8);

    /// Create a pit id, or `None` if `index` is off the board.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the linear index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The store owned by `player`.
    #[must_use]
    pub const fn store(player: Player) -> Self {
        match player {
            Player::One => Self::STORE_ONE,
            Player::Two => Self::STORE_TWO,
        }
    }

    /// The six houses owned by `player`, in increasing index order.
    pub fn houses(player: Player) -> impl DoubleEndedIterator<Item = PitId> {
        let first = Self::store(player).0 + 1;
        (first..first + HOUSES_PER_SIDE as u8).map(PitId)
    }

    /// Whether this pit is either player's store.
    #[must_use]
    pub const fn is_store(self) -> bool {
        self.0 == Self::STORE_ONE.0 || self.0 == Self::STORE_TWO.0
    }

    /// The player whose side of the board this pit is on.
    #[must_use]
    pub const fn owner(self) -> Player {
        if (self.0 as usize) < PITS_PER_ROW {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Whether this pit is one of `player`'s houses.
    #[must_use]
    pub fn is_house_of(self, player: Player) -> bool {
        !self.is_store() && self.owner() == player
    }

    /// The house directly across the board.
    ///
    /// Opposite houses sum to 14 (1↔13 ... 6↔8). Stores have no opposite.
    #[must_use]
    pub const fn opposite(self) -> Option<Self> {
        if self.is_store() {
            None
        } else {
            Some(Self(BOARD_SIZE as u8 - self.0))
        }
    }

    /// The next pit in sowing order (decreasing index, wrapping 0 → 13).
    #[must_use]
    pub const fn next_sow(self) -> Self {
        Self((self.0 + BOARD_SIZE as u8 - 1) % BOARD_SIZE as u8)
    }

    /// Row/column address of this pit.
    #[must_use]
    pub const fn coord(self) -> PitCoord {
        let index = self.0 as usize;
        if index < PITS_PER_ROW {
            PitCoord { row: 0, col: index }
        } else {
            PitCoord {
                row: 1,
                col: BOARD_SIZE - 1 - index,
            }
        }
    }
}

impl TryFrom<usize> for PitId {
    type Error = MancalaError;

    fn try_from(pit: usize) -> Result<Self> {
        Self::new(pit).ok_or(MancalaError::InvalidPitNumber { pit })
    }
}

impl std::fmt::Display for PitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pit {}", self.0)
    }
}

/// Row/column address of a pit, as used by front-ends.
///
/// Always on the board: built only through [`PitCoord::new`] or
/// [`PitId::coord`], and checked again on deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct PitCoord {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for PitCoord {
    type Error = MancalaError;

    fn try_from(raw: RawCoord) -> Result<Self> {
        Self::new(raw.row, raw.col)
    }
}

impl PitCoord {
    /// Validate a row/column pair.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < ROWS && col < PITS_PER_ROW {
            Ok(Self { row, col })
        } else {
            Err(MancalaError::InvalidPitIndex { row, col })
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// The linear pit this coordinate addresses.
    #[must_use]
    pub const fn pit(self) -> PitId {
        if self.row == 0 {
            PitId(self.col as u8)
        } else {
            PitId((BOARD_SIZE - 1 - self.col) as u8)
        }
    }
}

impl std::fmt::Display for PitCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
