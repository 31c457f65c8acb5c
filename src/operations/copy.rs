//! Recursive directory copying with exclude filtering

use crate::system::{EntryKind, System};
use crate::utils::pattern::ExcludeMatcher;
use std::io;
use std::path::Path;
use tracing::debug;

/// Counts of what a directory copy produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub directories: usize,
    pub symlinks: usize,
}

/// Copy the directory `source` into a newly created `target`
///
/// Entries whose base name matches one of `exclude_patterns` are skipped,
/// together with everything below them. Symbolic links are recreated with
/// the same link target instead of being followed.
///
/// A failure part way through leaves whatever was already written in place.
///
/// # Errors
///
/// Returns an error if:
/// - An exclude pattern cannot be compiled (`InvalidInput`)
/// - The source does not exist or is not a directory
/// - A copied entry is a FIFO, socket or device node (`Unsupported`)
/// - The target or any entry below it cannot be created
pub fn copy_directory<S: AsRef<str>>(
    system: &dyn System,
    source: &Path,
    target: &Path,
    exclude_patterns: &[S],
) -> io::Result<CopyStats> {
    let matcher = ExcludeMatcher::new(exclude_patterns)?;

    if !system.is_dir(source) {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Source is not a directory: {}", source.display()),
        ));
    }

    let skip = |name: &str| {
        let excluded = matcher.is_excluded(name);
        if excluded {
            debug!("Excluding: {name}");
        }
        excluded
    };
    let entries = system.walk_dir(source, &skip)?;

    // Special files fail the copy before the target is created
    if let Some(special) = entries.iter().find(|entry| entry.kind == EntryKind::Other) {
        return Err(special_file_error(&special.path));
    }

    system.create_dir_all(target)?;

    let mut stats = CopyStats::default();

    for entry in entries {
        let relative_path = entry
            .path
            .strip_prefix(source)
            .map_err(|e| io::Error::other(format!("Failed to calculate relative path: {e}")))?;
        let target_path = target.join(relative_path);

        match entry.kind {
            EntryKind::Dir => {
                system.create_dir_all(&target_path)?;
                stats.directories += 1;
            }
            EntryKind::File => {
                system.copy(&entry.path, &target_path)?;
                stats.files += 1;
            }
            EntryKind::Symlink => {
                let link_target = system.read_link(&entry.path)?;
                debug!(
                    "Recreating symlink {} -> {}",
                    target_path.display(),
                    link_target.display()
                );
                system.symlink(&link_target, &target_path)?;
                stats.symlinks += 1;
            }
            EntryKind::Other => return Err(special_file_error(&entry.path)),
        }
    }

    Ok(stats)
}

fn special_file_error(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("Cannot copy special file: {}", path.display()),
    )
}
