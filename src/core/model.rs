// SvgSweep - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// Every value here lives for the processing of a single source entry, except
// `PassReport`, which folds those values for the caller once the pass ends.

use crate::util::error::ProcessError;
use std::ffi::OsStr;
use std::path::PathBuf;

// =============================================================================
// Classification
// =============================================================================

/// Result of sniffing the leading bytes of a file.
///
/// The two SVG variants record which rule matched so debug logging can tell
/// a bare `<svg` document from one that opens with an XML declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `<svg` found within the header.
    SvgTag,

    /// `<?xml` found within the header and `<svg` found in the bytes that
    /// immediately follow it.
    XmlThenSvgTag,

    /// Neither rule matched.
    NotSvg,
}

impl Classification {
    /// Whether the file should be relocated.
    pub fn is_svg(self) -> bool {
        !matches!(self, Self::NotSvg)
    }
}

// =============================================================================
// Per-file outcome
// =============================================================================

/// Successful result of processing one source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was classified as SVG and moved.
    Moved { from: PathBuf, to: PathBuf },

    /// The file was left in place: its content is not SVG-like.
    Skipped { path: PathBuf },
}

// =============================================================================
// Pass events (console contract)
// =============================================================================

/// Per-file notifications emitted while a pass runs.
///
/// The binary turns these into its stdout lines; tests collect them.
#[derive(Debug)]
pub enum PassEvent<'a> {
    /// A file was moved. Names are base names, not full paths.
    Moved {
        original: &'a OsStr,
        renamed: &'a OsStr,
    },

    /// Processing a file failed; the pass continues with the next entry.
    Failed {
        file_name: &'a OsStr,
        error: &'a ProcessError,
    },
}

// =============================================================================
// Pass report
// =============================================================================

/// Everything a completed pass did, in directory-listing order.
#[derive(Debug, Default)]
pub struct PassReport {
    /// `(from, to)` for every moved file.
    pub moved: Vec<(PathBuf, PathBuf)>,

    /// Regular files left in place.
    pub skipped: Vec<PathBuf>,

    /// Per-file failures, each already reported through `PassEvent::Failed`.
    pub failures: Vec<ProcessError>,
}

impl PassReport {
    /// Fold one per-file result into the report.
    pub fn record(&mut self, result: Result<FileOutcome, ProcessError>) {
        match result {
            Ok(FileOutcome::Moved { from, to }) => self.moved.push((from, to)),
            Ok(FileOutcome::Skipped { path }) => self.skipped.push(path),
            Err(e) => self.failures.push(e),
        }
    }

    /// Number of regular files the pass attempted.
    pub fn processed(&self) -> usize {
        self.moved.len() + self.skipped.len() + self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_classification_is_svg() {
        assert!(Classification::SvgTag.is_svg());
        assert!(Classification::XmlThenSvgTag.is_svg());
        assert!(!Classification::NotSvg.is_svg());
    }

    #[test]
    fn test_report_record_sorts_results() {
        let mut report = PassReport::default();
        report.record(Ok(FileOutcome::Moved {
            from: PathBuf::from("src/a.png"),
            to: PathBuf::from("dst/a.svg"),
        }));
        report.record(Ok(FileOutcome::Skipped {
            path: PathBuf::from("src/b.png"),
        }));
        report.record(Err(ProcessError::Read {
            path: PathBuf::from("src/c.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }));

        assert_eq!(report.moved.len(), 1);
        assert_eq!(report.skipped, vec![PathBuf::from("src/b.png")]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.processed(), 3);
    }
}
