//! Write-then-rename file replacement.

use crate::error::{ResolverError, Result};
use crate::fs::WholeFileFs;
use rand::RngCore;
use rand::rngs::OsRng;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Replaces `path` with `contents` so readers see either the old or the new
/// file, never a mix.
///
/// The data goes to `<path>.<24 hex digits>.tmp` first and is then renamed
/// over `path`. The temporary file is removed on every exit path; after a
/// successful rename there is nothing left to remove.
///
/// # Errors
///
/// Returns [`ResolverError::RandomSource`] if the OS random source fails
/// (before any file is touched), or [`ResolverError::Io`] if the write or
/// rename fails.
pub fn atomic_write(
    fs: &impl WholeFileFs,
    path: &Path,
    contents: &[u8],
    mode: u32,
) -> Result<()> {
    atomic_write_with_rng(fs, &mut OsRng, path, contents, mode)
}

/// [`atomic_write`] with an explicit random source for the temp name.
///
/// # Errors
///
/// Same as [`atomic_write`].
pub fn atomic_write_with_rng(
    fs: &impl WholeFileFs,
    rng: &mut impl RngCore,
    path: &Path,
    contents: &[u8],
    mode: u32,
) -> Result<()> {
    let mut suffix = [0u8; 12];
    rng.try_fill_bytes(&mut suffix)
        .map_err(ResolverError::RandomSource)?;

    let tmp = temp_path(path, &suffix);
    let _guard = RemoveOnDrop { fs, path: &tmp };

    fs.write_file(&tmp, contents, mode)?;
    fs.rename(&tmp, path)?;
    tracing::trace!(path = %path.display(), bytes = contents.len(), "Atomically replaced file");
    Ok(())
}

fn temp_path(path: &Path, suffix: &[u8]) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    let mut hex = String::with_capacity(suffix.len() * 2);
    for b in suffix {
        let _ = write!(hex, "{b:02x}");
    }
    name.push(format!(".{hex}.tmp"));
    PathBuf::from(name)
}

struct RemoveOnDrop<'a, F: WholeFileFs> {
    fs: &'a F,
    path: &'a Path,
}

impl<F: WholeFileFs> Drop for RemoveOnDrop<'_, F> {
    fn drop(&mut self) {
        // Usually NotFound: the rename consumed the file.
        if let Err(e) = self.fs.remove(self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temporary file"
                );
            }
        }
    }
}
