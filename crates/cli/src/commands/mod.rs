//! Subcommand handlers. Each drives one screen and renders its outcome.

pub mod item;
pub mod lookup;
pub mod ping;
pub mod search;
pub mod supplier;
