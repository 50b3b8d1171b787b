//! Game implementations of [`crate::rules::RulesEngine`].

pub mod kalah;
