// SvgSweep - app/relocate.rs
//
// The relocation pass. Sets up the destination directory once, snapshots the
// source listing, then for each regular file: sniff → name → move.
//
// Error containment:
//   - Setup failures (destination cannot be created, source cannot be listed)
//     abort the pass before any file is touched.
//   - Every per-file failure is reported through the event callback, folded
//     into the report, and the loop continues. Nothing is retried.
//
// The pass is single-threaded. The classification handle is closed before
// the move is attempted.

use crate::core::model::{FileOutcome, PassEvent, PassReport};
use crate::core::{naming, sniff};
use crate::platform::fs::{self, ListedEntry};
use crate::util::error::{ProcessError, SetupError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The two directories a pass works between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocatorConfig {
    /// Directory whose direct children are inspected.
    pub source_dir: PathBuf,

    /// Directory that receives relocated files. Created if absent.
    pub destination_dir: PathBuf,
}

/// Run one pass over `config.source_dir`.
///
/// `on_event` is called on the caller's thread for every move and every
/// per-file failure, in listing order.
///
/// Returns `Err` only for setup failures.
pub fn run_pass<F>(config: &RelocatorConfig, mut on_event: F) -> Result<PassReport, SetupError>
where
    F: FnMut(PassEvent<'_>),
{
    fs::ensure_dir(&config.destination_dir).map_err(|source| SetupError::CreateDestination {
        path: config.destination_dir.clone(),
        source,
    })?;

    if let Ok(meta) = std::fs::metadata(&config.source_dir) {
        if !meta.is_dir() {
            return Err(SetupError::SourceNotADirectory {
                path: config.source_dir.clone(),
            });
        }
    }

    let entries = fs::list_dir(&config.source_dir).map_err(|source| SetupError::ListSource {
        path: config.source_dir.clone(),
        source,
    })?;

    tracing::debug!(
        source = %config.source_dir.display(),
        destination = %config.destination_dir.display(),
        entries = entries.len(),
        "Pass starting"
    );

    let mut report = PassReport::default();

    for entry in entries {
        let result = match entry {
            ListedEntry::File(path) => process_file(&path, &config.destination_dir),
            ListedEntry::Other(_) => continue,
            ListedEntry::Unreadable { path, source } => {
                Err(ProcessError::Listing { path, source })
            }
        };

        match &result {
            Ok(FileOutcome::Moved { from, to }) => on_event(PassEvent::Moved {
                original: base_name(from),
                renamed: base_name(to),
            }),
            Ok(FileOutcome::Skipped { .. }) => {}
            Err(error) => {
                tracing::debug!(path = %error.path().display(), error = %error, "File failed");
                on_event(PassEvent::Failed {
                    file_name: base_name(error.path()),
                    error,
                });
            }
        }

        report.record(result);
    }

    tracing::debug!(
        moved = report.moved.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        "Pass complete"
    );

    Ok(report)
}

/// Classify one regular file and move it when it is SVG.
pub fn process_file(path: &Path, destination_dir: &Path) -> Result<FileOutcome, ProcessError> {
    let classification = sniff::classify_file(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !classification.is_svg() {
        return Ok(FileOutcome::Skipped {
            path: path.to_path_buf(),
        });
    }

    let to = naming::destination_path(path, destination_dir).ok_or_else(|| {
        ProcessError::NoFileName {
            path: path.to_path_buf(),
        }
    })?;

    fs::move_file(path, &to).map_err(|source| ProcessError::Move {
        from: path.to_path_buf(),
        to: to.clone(),
        source,
    })?;

    tracing::debug!(
        from = %path.display(),
        to = %to.display(),
        ?classification,
        "Relocated"
    );

    Ok(FileOutcome::Moved {
        from: path.to_path_buf(),
        to,
    })
}

fn base_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}
