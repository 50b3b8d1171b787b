//! Kalah: six houses and one store per player, four stones per house.
//!
//! Rules implemented by [`Board`]:
//! - Sowing runs counter-clockwise and skips the opponent's store
//! - Ending in your own store earns a free turn
//! - Ending in an empty house of your own captures the opposite house
//! - When either side runs out of stones, each side's remainder goes to its
//!   owner's store and the larger store wins

mod board;
mod sowing;

pub use board::Board;
