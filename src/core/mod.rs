//! Core engine types: players and board geometry.
//!
//! These are shared by the rules engine, the console shell and the Python
//! bindings. Nothing here knows about sowing or scoring.

pub mod player;
pub mod pit;

pub use player::{Player, PlayerMap};
pub use pit::{
    PitCoord, PitId, BOARD_SIZE, HOUSES_PER_SIDE, INITIAL_STONES, PITS_PER_ROW, ROWS, TOTAL_STONES,
};
