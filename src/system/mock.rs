//! Mock system implementation for testing

use super::{EntryKind, System, WalkEntry};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem with directories, files and
/// symbolic links, perfect for fast, isolated unit tests without side effects.
///
/// # Example
/// ```
/// use dupdir::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/test/file.txt", b"Hello, world!")
///     .with_dir("/test/subdir")
///     .with_symlink("/test/link", "file.txt");
///
/// assert!(system.exists(Path::new("/test/file.txt")));
/// assert!(system.is_dir(Path::new("/test/subdir")));
/// assert!(system.exists(Path::new("/test/link")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    symlinks: HashMap<PathBuf, PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MockSystemState {
    fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path) || self.symlinks.contains_key(path)
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !self.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
        Ok(())
    }

    fn ensure_dirs(&mut self, path: &Path) -> io::Result<()> {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                continue;
            }
            if self.files.contains_key(ancestor) || self.symlinks.contains_key(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("Path exists but is not a directory: {}", ancestor.display()),
                ));
            }
        }
        for ancestor in path.ancestors() {
            if ancestor != Path::new("") {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                symlinks: HashMap::new(),
                read_only: HashSet::new(),
            })),
        }
    }

    /// Set the current working directory (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.state_mut().current_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Add a file with contents, creating parent directories (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> Self {
        let path = path.as_ref();
        {
            let mut state = self.state_mut();
            if let Some(parent) = path.parent() {
                // Builders only fail on conflicting fixtures
                let _ignored = state.ensure_dirs(parent);
            }
            state.files.insert(path.to_path_buf(), contents.to_vec());
        }
        self
    }

    /// Add a directory and its ancestors (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        let _ignored = self.state_mut().ensure_dirs(path.as_ref());
        self
    }

    /// Add a symbolic link at `link` pointing to `target` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_symlink<P: AsRef<Path>, T: AsRef<Path>>(self, link: P, target: T) -> Self {
        let link = link.as_ref();
        {
            let mut state = self.state_mut();
            if let Some(parent) = link.parent() {
                let _ignored = state.ensure_dirs(parent);
            }
            state
                .symlinks
                .insert(link.to_path_buf(), target.as_ref().to_path_buf());
        }
        self
    }

    /// Refuse any write at or below `path` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_read_only<P: AsRef<Path>>(self, path: P) -> Self {
        self.state_mut()
            .read_only
            .insert(path.as_ref().to_path_buf());
        self
    }

    fn state(&self) -> io::Result<RwLockReadGuard<'_, MockSystemState>> {
        self.state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, MockSystemState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.state()?.current_dir.clone())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state().is_ok_and(|state| state.contains(path))
    }

    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        self.state().is_ok_and(|state| state.dirs.contains(path))
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.state()?.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state_mut();
        state.check_writable(path)?;
        state.check_parent(path)?;
        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state_mut();
        if state.dirs.contains(path) {
            return Ok(());
        }
        state.check_writable(path)?;
        state.ensure_dirs(path)
    }

    #[inline]
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let contents = self.state()?.files.get(from).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Source file not found: {}", from.display()),
            )
        })?;

        let size = u64::try_from(contents.len()).unwrap_or(u64::MAX);
        self.write(to, &contents)?;
        Ok(size)
    }

    #[inline]
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.state()?.symlinks.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a symbolic link: {}", path.display()),
            )
        })
    }

    #[inline]
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        let mut state = self.state_mut();
        state.check_writable(link)?;
        state.check_parent(link)?;
        if state.contains(link) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("File exists: {}", link.display()),
            ));
        }
        state
            .symlinks
            .insert(link.to_path_buf(), target.to_path_buf());
        drop(state);
        Ok(())
    }

    #[inline]
    fn walk_dir(&self, root: &Path, skip: &dyn Fn(&str) -> bool) -> io::Result<Vec<WalkEntry>> {
        let state = self.state()?;

        if !state.dirs.contains(root) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Directory not found: {}", root.display()),
            ));
        }

        let children_of = |dir: &Path| -> Vec<WalkEntry> {
            let is_child = |p: &Path| p.parent() == Some(dir) && p != dir;
            let dirs = state
                .dirs
                .iter()
                .filter(|p| is_child(p.as_path()))
                .map(|p| (p, EntryKind::Dir));
            let files = state
                .files
                .keys()
                .filter(|p| is_child(p.as_path()))
                .map(|p| (p, EntryKind::File));
            let links = state
                .symlinks
                .keys()
                .filter(|p| is_child(p.as_path()))
                .map(|p| (p, EntryKind::Symlink));
            dirs.chain(files)
                .chain(links)
                .map(|(path, kind)| WalkEntry {
                    path: path.clone(),
                    kind,
                })
                .collect()
        };

        let mut entries = Vec::new();
        let mut to_visit: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(current) = to_visit.pop() {
            for child in children_of(current.as_path()) {
                let name = child
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if skip(name.as_str()) {
                    continue;
                }
                if child.kind == EntryKind::Dir {
                    to_visit.push(child.path.clone());
                }
                entries.push(child);
            }
        }
        drop(state);

        // Sort entries by path for deterministic output; parents sort first
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(entries)
    }
}
