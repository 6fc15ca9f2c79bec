// SvgSweep - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SvgSweep configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/svgsweep/ or %APPDATA%\SvgSweep\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works with
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[paths]` section.
    pub paths: PathsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[paths]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Directory scanned for mislabelled SVG files.
    pub source_dir: Option<PathBuf>,
    /// Directory that receives relocated files.
    pub destination_dir: Option<PathBuf>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from config.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory scanned for mislabelled SVG files.
    pub source_dir: PathBuf,
    /// Directory that receives relocated files.
    pub destination_dir: PathBuf,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(constants::DEFAULT_SOURCE_DIR),
            destination_dir: PathBuf::from(constants::DEFAULT_DESTINATION_DIR),
            log_level: None,
        }
    }
}

/// Load and validate config.toml at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file yields defaults with no warnings. An unreadable
/// or unparseable file yields defaults plus a warning.
///
/// This runs before logging is initialised (the file may choose the log
/// level), so warnings are returned rather than logged.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let (config, parse_warnings) = parse_config(&content, config_path);
    warnings.extend(parse_warnings);
    (config, warnings)
}

/// Fail when an explicitly requested config file does not exist.
///
/// The platform default is optional; a path named on the command line is not.
pub fn require_file(config_path: &Path) -> Result<(), ConfigError> {
    match std::fs::metadata(config_path) {
        Ok(_) => Ok(()),
        Err(source) => Err(ConfigError::Io {
            path: config_path.to_path_buf(),
            source,
        }),
    }
}

/// Parse and validate config.toml content. `origin` is only used in messages.
pub fn parse_config(content: &str, origin: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: origin.to_path_buf(),
                source,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Paths --
    if let Some(dir) = raw.paths.source_dir {
        if dir.as_os_str().is_empty() {
            warnings.push(empty_path_warning("paths.source_dir", constants::DEFAULT_SOURCE_DIR));
        } else {
            config.source_dir = dir;
        }
    }

    if let Some(dir) = raw.paths.destination_dir {
        if dir.as_os_str().is_empty() {
            warnings.push(empty_path_warning(
                "paths.destination_dir",
                constants::DEFAULT_DESTINATION_DIR,
            ));
        } else {
            config.destination_dir = dir;
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            let err = ConfigError::InvalidValue {
                field: "logging.level",
                value: level,
                expected: "error, warn, info, debug, trace",
            };
            warnings.push(format!("{err}. Using default (info)."));
        }
    }

    (config, warnings)
}

/// Warnings about the final, CLI-merged path pair.
pub fn validate_paths(source_dir: &Path, destination_dir: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    if source_dir == destination_dir {
        warnings.push(format!(
            "Source and destination are the same directory ('{}'); \
             SVG files will only be renamed in place.",
            source_dir.display()
        ));
    }
    warnings
}

fn empty_path_warning(field: &'static str, default: &str) -> String {
    let err = ConfigError::InvalidValue {
        field,
        value: String::new(),
        expected: "a non-empty directory path",
    };
    format!("{err}. Using default ({default}).")
}
