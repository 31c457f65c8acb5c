//! Folder duplication: target naming, collision avoidance and the copy itself

use crate::error::DupError;
use crate::naming::NamingStrategy;
use crate::operations::copy::copy_directory;
use crate::system::System;
use crate::utils::path::{append_to_file_name, split_base_name};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything needed to copy one folder
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DuplicationRequest {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub exclude_patterns: Vec<String>,
}

impl DuplicationRequest {
    /// Create a new duplication request
    #[must_use]
    #[inline]
    pub fn new<S: Into<PathBuf>, T: Into<PathBuf>>(
        source_path: S,
        target_path: T,
        exclude_patterns: Vec<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            exclude_patterns,
        }
    }
}

/// Derives a target next to the source folder and copies the folder there
///
/// The three steps run strictly in order: [`Self::generate_target_path`],
/// [`Self::find_available_path`], then [`Self::duplicate_folder`]. Another
/// process may create the chosen target between the last two; that case is
/// reported as [`DupError::TargetExists`].
pub struct FolderDuplicationService<'src> {
    system: &'src dyn System,
    naming: NamingStrategy,
}

impl<'src> FolderDuplicationService<'src> {
    #[must_use]
    #[inline]
    pub fn new(system: &'src dyn System, naming: NamingStrategy) -> Self {
        Self { system, naming }
    }

    /// Join the source's parent directory with the generated name
    ///
    /// An empty generated name (`Custom("")`) yields the parent directory
    /// itself; callers are expected to reject empty names first.
    #[must_use]
    pub fn generate_target_path(&self, source_path: &Path) -> PathBuf {
        let (parent, base_name) = split_base_name(source_path);
        parent.join(self.naming.generate_name(&base_name))
    }

    /// Return `base_path`, or the first free `{base_path}_{n}` for n = 1, 2, ...
    #[must_use]
    pub fn find_available_path(&self, base_path: &Path) -> PathBuf {
        if !self.system.exists(base_path) {
            return base_path.to_path_buf();
        }

        let mut counter: u64 = 1;
        loop {
            let candidate = append_to_file_name(base_path, &format!("_{counter}"));
            debug!("Probing {}", candidate.display());
            if !self.system.exists(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Copy the request's source to its target and return the target path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source does not exist (`SourceNotFound`)
    /// - The target already exists (`TargetExists`)
    /// - The copy itself fails (`Filesystem`); nothing is rolled back
    pub fn duplicate_folder(&self, request: &DuplicationRequest) -> Result<PathBuf, DupError> {
        let DuplicationRequest {
            ref source_path,
            ref target_path,
            ref exclude_patterns,
        } = *request;

        if !self.system.exists(source_path) {
            return Err(DupError::source_not_found(source_path));
        }

        if self.system.exists(target_path) {
            return Err(DupError::target_exists(target_path));
        }

        let stats = copy_directory(self.system, source_path, target_path, exclude_patterns.as_slice())
            .map_err(|e| {
                DupError::filesystem(
                    format!(
                        "Failed to copy {} to {}",
                        source_path.display(),
                        target_path.display()
                    ),
                    e,
                )
            })?;

        debug!(
            "Copied {} files, {} directories, {} symlinks",
            stats.files, stats.directories, stats.symlinks
        );

        Ok(target_path.clone())
    }
}
