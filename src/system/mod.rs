//! System abstraction for environment and filesystem operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// What a walked entry is, without following symbolic links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    /// FIFO, socket, device node or anything else without copyable contents
    Other,
}

/// Entry from directory walking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Unified trait for system operations (environment + filesystem)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env`, `std::fs` and `walkdir`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    // ==================== Filesystem Operations ====================

    /// Check if anything (file, directory or symlink) is at `path`
    ///
    /// Never fails: an access error counts as "does not exist". Symlinks are
    /// not followed, so a dangling link still exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    ///
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy a regular file from source to destination
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Read the target of a symbolic link
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Create a symbolic link at `link` pointing to `target`
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Recursively walk a directory, returning all entries below `root`
    ///
    /// Entries whose base name satisfies `skip` are left out, and a skipped
    /// directory is not descended into. The root itself is never tested.
    /// Symbolic links are reported as links and never followed. A directory
    /// always comes before its contents.
    fn walk_dir(&self, root: &Path, skip: &dyn Fn(&str) -> bool) -> io::Result<Vec<WalkEntry>>;
}
