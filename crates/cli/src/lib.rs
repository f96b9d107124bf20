//! `stockroom-cli` — command-line front end for the inventory API.
//!
//! Each subcommand drives one screen from `stockroom-client` and renders
//! its outcome as text or JSON.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
