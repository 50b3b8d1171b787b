//! Text front-end over any [`crate::rules::RulesEngine`].
//!
//! The shell holds no game rules of its own: legality, sowing and scoring
//! all come from the engine it wraps.

mod console;

pub use console::{outcome_message, ConsoleShell};
