//! Path manipulation utilities

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components
///
/// This is purely lexical; the filesystem is never consulted.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {
                // Skip '.' components
            }
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // '..' directly below the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => {
                components.push(component);
            }
        }
    }

    components.iter().collect()
}

/// Make `path` absolute against `base` and normalize it
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Split a path into its parent directory and base name
///
/// A path without a final component (such as `/`) has an empty base name.
#[must_use]
pub fn split_base_name(path: &Path) -> (&Path, String) {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (parent, name)
}

/// Append `suffix` to the final component of `path`, keeping its parent
#[must_use]
pub fn append_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("./a/../b/./c")),
            PathBuf::from("b/c")
        );

        assert_eq!(normalize_path(Path::new("../a/b")), PathBuf::from("../a/b"));

        assert_eq!(normalize_path(Path::new("a/b/../..")), PathBuf::from(""));

        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_absolutize() {
        let base = Path::new("/work/projects");
        assert_eq!(absolutize(Path::new("."), base), PathBuf::from("/work/projects"));
        assert_eq!(absolutize(Path::new("../other"), base), PathBuf::from("/work/other"));
        assert_eq!(absolutize(Path::new("/abs/app"), base), PathBuf::from("/abs/app"));
    }

    #[test]
    fn test_split_base_name() {
        let (parent, name) = split_base_name(Path::new("/work/app"));
        assert_eq!(parent, Path::new("/work"));
        assert_eq!(name, "app");

        let (parent, name) = split_base_name(Path::new("/"));
        assert_eq!(parent, Path::new(""));
        assert_eq!(name, "");
    }

    #[test]
    fn test_append_to_file_name() {
        assert_eq!(
            append_to_file_name(Path::new("/work/app.v2"), "_1"),
            PathBuf::from("/work/app.v2_1")
        );
        assert_eq!(append_to_file_name(Path::new("app"), "_3"), PathBuf::from("app_3"));
    }
}
