//! # `DupDir`
//!
//! `DupDir` is a command-line tool that duplicates a folder next to itself
//! under a new name, skipping excluded entries and never overwriting an
//! existing folder.
//!
//! ## Usage
//!
//! **Timestamped copy of the current folder:**
//! ```sh
//! dupdir
//! ```
//!
//! **Named copy without build output:**
//! ```sh
//! dupdir ./my-app --name my-app-experiment --exclude target --exclude "*.log"
//! ```
//!
//! See `dupdir --help` for more options.
//!
//! ---
//! © 2024 `DupDir` Authors. MIT or Apache-2.0 licensed. See README and LICENSE files for more info.

use clap::Parser as _;
use dupdir::cli::Args;
use dupdir::error::DupError;
use dupdir::operations::duplicate::DuplicateOutcome;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbosity flags
    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr; stdout carries only the resulting path
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match dupdir::run(&args) {
        Ok(DuplicateOutcome::Duplicated(path) | DuplicateOutcome::Planned(path)) => {
            println!("{}", path.display());
            std::process::exit(0);
        }
        Ok(_) => std::process::exit(0),
        Err(err) => {
            error!("Failed to duplicate folder: {:#}", err);
            std::process::exit(
                err.downcast_ref::<DupError>()
                    .map_or(1, DupError::exit_code),
            );
        }
    }
}
