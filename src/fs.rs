//! Whole-file filesystem access.
//!
//! The manager never touches `std::fs` directly. It goes through
//! [`WholeFileFs`] so it can run against the real OS ([`DirectFs`]), a
//! sandbox directory (`DirectFs::with_root`), or memory ([`MemFs`]).

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

/// Minimal file operations used by the resolver manager.
///
/// All paths are absolute. Absence is reported as an
/// [`io::ErrorKind::NotFound`] error so callers can branch on it.
pub trait WholeFileFs {
    /// Returns whether `path` is a regular file.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` if nothing exists at `path`.
    fn stat(&self, path: &Path) -> io::Result<bool>;

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Any I/O failure, including `NotFound`.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates or truncates `path` and writes `contents` with `mode`.
    ///
    /// # Errors
    ///
    /// Any I/O failure.
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;

    /// Renames `from` to `to`, replacing `to` if it exists.
    ///
    /// # Errors
    ///
    /// Any I/O failure, including `NotFound` for `from`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Removes the file at `path`.
    ///
    /// # Errors
    ///
    /// Any I/O failure, including `NotFound`.
    fn remove(&self, path: &Path) -> io::Result<()>;
}

impl<T: WholeFileFs + ?Sized> WholeFileFs for &T {
    fn stat(&self, path: &Path) -> io::Result<bool> {
        (**self).stat(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        (**self).write_file(path, contents, mode)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        (**self).remove(path)
    }
}

// ---------------------------------------------------------------------------
// Real filesystem
// ---------------------------------------------------------------------------

/// [`WholeFileFs`] backed by the operating system.
///
/// With a root set, absolute paths are resolved under it, so
/// `/etc/resolv.conf` becomes `<root>/etc/resolv.conf`. Tests use this to
/// run the manager inside a temporary directory.
#[derive(Debug, Clone, Default)]
pub struct DirectFs {
    root: Option<PathBuf>,
}

impl DirectFs {
    /// Operates on the real `/`.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Resolves every path under `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Maps an absolute path onto the underlying filesystem.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path.strip_prefix("/").unwrap_or(path)),
            None => path.to_path_buf(),
        }
    }
}

impl WholeFileFs for DirectFs {
    fn stat(&self, path: &Path) -> io::Result<bool> {
        Ok(std::fs::metadata(self.resolve(path))?.is_file())
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(path))
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(mode)
            .open(self.resolve(path))?;
        file.write_all(contents)?;
        file.sync_all()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(self.resolve(from), self.resolve(to))
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(self.resolve(path))
    }
}

// ---------------------------------------------------------------------------
// In-memory filesystem
// ---------------------------------------------------------------------------

/// An operation [`MemFs`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsOp {
    /// [`WholeFileFs::stat`].
    Stat,
    /// [`WholeFileFs::read_file`].
    Read,
    /// [`WholeFileFs::write_file`]. Half the bytes land before the error.
    Write,
    /// [`WholeFileFs::rename`].
    Rename,
    /// [`WholeFileFs::remove`].
    Remove,
}

#[derive(Debug, Clone)]
enum Entry {
    File { contents: Vec<u8>, mode: u32 },
    Dir,
}

#[derive(Debug, Default)]
struct MemState {
    entries: HashMap<PathBuf, Entry>,
    failures: Vec<FsOp>,
}

impl MemState {
    fn take_failure(&mut self, op: FsOp) -> io::Result<()> {
        if let Some(i) = self.failures.iter().position(|f| *f == op) {
            self.failures.remove(i);
            return Err(io::Error::other(format!("injected {op:?} failure")));
        }
        Ok(())
    }
}

/// In-memory [`WholeFileFs`] for deterministic tests.
///
/// Failures can be injected per operation with [`fail_next`](Self::fail_next);
/// each injected failure fires once.
#[derive(Debug, Default)]
pub struct MemFs {
    state: Mutex<MemState>,
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file", path.display()),
    )
}

impl MemFs {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates (or replaces) a regular file with mode `0o644`.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.state.lock().entries.insert(
            path.into(),
            Entry::File {
                contents: contents.into(),
                mode: 0o644,
            },
        );
    }

    /// Creates a non-regular entry at `path`.
    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        self.state.lock().entries.insert(path.into(), Entry::Dir);
    }

    /// Returns the file contents at `path`, if it is a regular file.
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.state.lock().entries.get(path.as_ref()) {
            Some(Entry::File { contents, .. }) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Returns the file contents at `path` as UTF-8 (lossy).
    #[must_use]
    pub fn contents_str(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .map(|b| String::from_utf8_lossy(&b).into_owned())
    }

    /// Returns the mode recorded for the file at `path`.
    #[must_use]
    pub fn mode(&self, path: impl AsRef<Path>) -> Option<u32> {
        match self.state.lock().entries.get(path.as_ref()) {
            Some(Entry::File { mode, .. }) => Some(*mode),
            _ => None,
        }
    }

    /// Returns `true` if anything exists at `path`.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().entries.contains_key(path.as_ref())
    }

    /// Lists every path, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.state.lock().entries.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Makes the next call of `op` fail with an I/O error.
    pub fn fail_next(&self, op: FsOp) {
        self.state.lock().failures.push(op);
    }
}

impl WholeFileFs for MemFs {
    fn stat(&self, path: &Path) -> io::Result<bool> {
        let mut state = self.state.lock();
        state.take_failure(FsOp::Stat)?;
        match state.entries.get(path) {
            Some(Entry::File { .. }) => Ok(true),
            Some(Entry::Dir) => Ok(false),
            None => Err(not_found(path)),
        }
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut state = self.state.lock();
        state.take_failure(FsOp::Read)?;
        match state.entries.get(path) {
            Some(Entry::File { contents, .. }) => Ok(contents.clone()),
            Some(Entry::Dir) => Err(io::Error::other(format!(
                "{}: is a directory",
                path.display()
            ))),
            None => Err(not_found(path)),
        }
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let mut state = self.state.lock();
        if let Err(e) = state.take_failure(FsOp::Write) {
            let partial = contents[..contents.len() / 2].to_vec();
            state.entries.insert(
                path.to_path_buf(),
                Entry::File {
                    contents: partial,
                    mode,
                },
            );
            return Err(e);
        }
        if matches!(state.entries.get(path), Some(Entry::Dir)) {
            return Err(io::Error::other(format!(
                "{}: is a directory",
                path.display()
            )));
        }
        state.entries.insert(
            path.to_path_buf(),
            Entry::File {
                contents: contents.to_vec(),
                mode,
            },
        );
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut state = self.state.lock();
        state.take_failure(FsOp::Rename)?;
        let entry = state.entries.remove(from).ok_or_else(|| not_found(from))?;
        state.entries.insert(to.to_path_buf(), entry);
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock();
        state.take_failure(FsOp::Remove)?;
        state
            .entries
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }
}

/// Stats `path`, mapping absence to `None`.
pub(crate) fn probe(fs: &impl WholeFileFs, path: &Path) -> io::Result<Option<bool>> {
    match fs.stat(path) {
        Ok(regular) => Ok(Some(regular)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Removes `path`, treating absence as success.
pub(crate) fn remove_if_exists(fs: &impl WholeFileFs, path: &Path) -> io::Result<bool> {
    match fs.remove(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
