//! Command-line interface module
//!
//! Handles argument parsing and the interactive name prompt

pub mod args;
pub mod prompt;

pub use args::*;
