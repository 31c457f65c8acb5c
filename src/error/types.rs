//! Custom error types with exit codes

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dupdir operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DupError {
    /// Configuration Error - invalid configuration, folder name or CLI input
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The folder to duplicate is missing
    #[error("Source folder does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The chosen target is already taken
    #[error("Target folder already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    /// Filesystem Error - the underlying file operation failed
    #[error("{message}: {source}")]
    Filesystem {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Command Error - the open command failed
    #[error("Command error: {message}")]
    Command { message: String },
}

impl DupError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::SourceNotFound { .. } => 2,
            Self::TargetExists { .. } => 3,
            Self::Filesystem { .. } => 4,
            Self::Command { .. } => 5,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a source-not-found error
    #[inline]
    pub fn source_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a target-exists error
    #[inline]
    pub fn target_exists<P: Into<PathBuf>>(path: P) -> Self {
        Self::TargetExists { path: path.into() }
    }

    /// Create a filesystem error wrapping the platform error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S, source: io::Error) -> Self {
        Self::Filesystem {
            message: message.into(),
            source,
        }
    }

    /// Create a command error
    #[inline]
    pub fn command<S: Into<String>>(message: S) -> Self {
        Self::Command {
            message: message.into(),
        }
    }
}
