// SvgSweep - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors keep the underlying io::Error as their source so the causal
// chain survives into diagnostic logging.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Top-level error type for operations that end a run.
#[derive(Debug)]
pub enum SvgSweepError {
    /// The pass could not start.
    Setup(SetupError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for SvgSweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(e) => write!(f, "Setup error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for SvgSweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Setup(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Setup errors
// ---------------------------------------------------------------------------

/// Errors raised before any file is processed. These abort the pass.
#[derive(Debug)]
pub enum SetupError {
    /// The destination directory (or one of its parents) could not be created.
    CreateDestination { path: PathBuf, source: io::Error },

    /// The source directory could not be listed.
    ListSource { path: PathBuf, source: io::Error },

    /// The source path exists but is not a directory.
    SourceNotADirectory { path: PathBuf },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDestination { path, source } => write!(
                f,
                "Cannot create destination directory '{}': {source}",
                path.display()
            ),
            Self::ListSource { path, source } => write!(
                f,
                "Cannot list source directory '{}': {source}",
                path.display()
            ),
            Self::SourceNotADirectory { path } => {
                write!(f, "Source path '{}' is not a directory", path.display())
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDestination { source, .. } => Some(source),
            Self::ListSource { source, .. } => Some(source),
            Self::SourceNotADirectory { .. } => None,
        }
    }
}

impl From<SetupError> for SvgSweepError {
    fn from(e: SetupError) -> Self {
        Self::Setup(e)
    }
}

// ---------------------------------------------------------------------------
// Per-file errors
// ---------------------------------------------------------------------------

/// Errors confined to a single source entry. The pass reports these and
/// moves on to the next entry; they never reach the caller as `Err`.
#[derive(Debug)]
pub enum ProcessError {
    /// The file could not be opened or its prefix could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The file was classified as SVG but could not be moved.
    Move {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// The path has no final component to derive a destination name from.
    NoFileName { path: PathBuf },

    /// The directory listing yielded an unreadable entry.
    Listing { path: PathBuf, source: io::Error },
}

impl ProcessError {
    /// Path of the source entry this error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } => path,
            Self::Move { from, .. } => from,
            Self::NoFileName { path } => path,
            Self::Listing { path, .. } => path,
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Move { from, to, source } => write!(
                f,
                "cannot move '{}' to '{}': {source}",
                from.display(),
                to.display()
            ),
            Self::NoFileName { path } => {
                write!(f, "'{}' has no file name", path.display())
            }
            Self::Listing { path, source } => {
                write!(f, "cannot inspect '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Move { source, .. } => Some(source),
            Self::Listing { source, .. } => Some(source),
            Self::NoFileName { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value was rejected during validation.
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is invalid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<ConfigError> for SvgSweepError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for SvgSweep results.
pub type Result<T> = std::result::Result<T, SvgSweepError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_process_error_display_includes_path_and_cause() {
        let err = ProcessError::Read {
            path: PathBuf::from("drawable/locked.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("locked.png"), "{msg}");
        assert!(msg.contains("Permission denied"), "{msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_listing_error_names_path_once() {
        let err = ProcessError::Listing {
            path: PathBuf::from("drawable/odd.png"),
            source: io::Error::from_raw_os_error(2),
        };
        let msg = err.to_string();
        assert_eq!(msg.matches("odd.png").count(), 1, "{msg}");
    }

    #[test]
    fn test_process_error_path_points_at_source_entry() {
        let err = ProcessError::Move {
            from: PathBuf::from("a/icon.png"),
            to: PathBuf::from("b/icon.svg"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.path(), Path::new("a/icon.png"));
    }

    #[test]
    fn test_setup_error_wraps_into_top_level() {
        let err: SvgSweepError = SetupError::SourceNotADirectory {
            path: PathBuf::from("file.txt"),
        }
        .into();
        assert!(matches!(err, SvgSweepError::Setup(_)));
        assert!(err.to_string().starts_with("Setup error:"));
    }
}
