//! Shared helpers for paths and exclude patterns

pub mod path;
pub mod pattern;
