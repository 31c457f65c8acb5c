//! `DupDir` - A CLI tool for duplicating a folder next to itself
//!
//! This library derives a name for the copy, avoids collisions with existing
//! folders, copies the tree while skipping excluded entries, and optionally
//! opens the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod operations;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::Args;
use operations::duplicate::{DuplicateOperation, DuplicateOutcome};
use system::RealSystem;

/// Main entry point for the dupdir library
pub fn run(args: &Args) -> Result<DuplicateOutcome> {
    let system = RealSystem;
    let operation = DuplicateOperation::new(args, &system)?;
    operation.execute()
}
