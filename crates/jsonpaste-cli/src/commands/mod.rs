//! Command implementations for the jsonpaste CLI.
//!
//! Each command module executes one subcommand and prints its report in the
//! requested output format.

pub mod check;
pub mod completions;
pub mod config;
pub mod languages;
pub mod paste;
