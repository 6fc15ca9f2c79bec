// SvgSweep - platform/fs.rs
//
// Filesystem collaborators used by the relocation pass: one-level directory
// listing, destination directory creation, and a move that also works across
// volumes.

use std::io;
use std::path::{Path, PathBuf};

/// One entry from a non-recursive directory listing.
#[derive(Debug)]
pub enum ListedEntry {
    /// A regular file (symlinks are followed).
    File(PathBuf),

    /// A directory, dangling symlink, or any other non-regular entry.
    /// Never opened.
    Other(PathBuf),

    /// The entry was listed but its type could not be determined.
    Unreadable { path: PathBuf, source: io::Error },
}

/// List the direct children of `dir`.
///
/// The whole listing is collected before returning so that moving files out
/// of `dir` afterwards cannot disturb iteration. Order is whatever the
/// filesystem yields.
///
/// Returns `Err` only when `dir` itself cannot be read.
pub fn list_dir(dir: &Path) -> io::Result<Vec<ListedEntry>> {
    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut entries = Vec::new();
    for result in walker {
        match result {
            Ok(entry) if entry.file_type().is_file() => {
                entries.push(ListedEntry::File(entry.into_path()));
            }
            Ok(entry) => {
                tracing::debug!(path = %entry.path().display(), "Skipping non-regular entry");
                entries.push(ListedEntry::Other(entry.into_path()));
            }
            Err(e) if e.depth() == 0 => {
                // Failure opening `dir` itself.
                return Err(io::Error::from(e));
            }
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());

                // A dangling symlink is not a regular file: skip it like any
                // other non-regular entry.
                let is_symlink = std::fs::symlink_metadata(&path)
                    .map(|meta| meta.file_type().is_symlink())
                    .unwrap_or(false);
                if is_symlink {
                    tracing::debug!(path = %path.display(), error = %e, "Skipping dangling symlink");
                    entries.push(ListedEntry::Other(path));
                    continue;
                }

                entries.push(ListedEntry::Unreadable {
                    path,
                    source: os_error(e),
                });
            }
        }
    }

    tracing::debug!(dir = %dir.display(), count = entries.len(), "Directory listed");
    Ok(entries)
}

/// The OS error behind a walkdir failure, without walkdir's path prefix.
/// The path is carried separately by the caller.
fn os_error(e: walkdir::Error) -> io::Error {
    e.into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"))
}

/// Create `dir` and any missing parents. A no-op when it already exists.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;
    tracing::info!(dir = %dir.display(), "Created directory");
    Ok(())
}

/// Move `from` to `to`, replacing an existing file at `to`.
///
/// Tries a rename first. When the two paths are on different volumes the
/// rename is refused by the OS; the file is then copied and the source
/// removed. Any other rename failure is returned as-is.
pub fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            tracing::debug!(
                from = %from.display(),
                to = %to.display(),
                "Rename crosses volumes; copying instead"
            );
            copy_then_remove(from, to)
        }
        Err(e) => Err(e),
    }
}

/// Fallback move: copy `from` over `to`, then delete `from`.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)
}

/// EXDEV on Unix, ERROR_NOT_SAME_DEVICE on Windows.
#[cfg(unix)]
const CROSS_DEVICE_CODE: i32 = 18;
#[cfg(windows)]
const CROSS_DEVICE_CODE: i32 = 17;
#[cfg(not(any(unix, windows)))]
const CROSS_DEVICE_CODE: i32 = -1;

/// Whether a rename failed only because source and target are on
/// different filesystems.
fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(CROSS_DEVICE_CODE)
}
