// SvgSweep - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SvgSweep";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SvgSweep";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Content sniffing
// =============================================================================

/// Number of leading bytes read from every file before classification.
pub const HEADER_LEN: u64 = 100;

/// Number of bytes read after the header when the header holds an XML
/// declaration but no `<svg` tag.  The read continues from the current
/// stream position; it never rewinds.
pub const XML_FOLLOW_LEN: u64 = 500;

/// Opening of an SVG root element.
pub const SVG_TAG: &[u8] = b"<svg";

/// Opening of an XML declaration.
pub const XML_DECL: &[u8] = b"<?xml";

/// Extension given to every relocated file (without the leading dot).
pub const SVG_EXTENSION: &str = "svg";

// =============================================================================
// Paths
// =============================================================================

/// Directory scanned when neither the CLI nor config.toml names one.
/// Relative to the working directory (an Android project root).
pub const DEFAULT_SOURCE_DIR: &str = "app/src/main/res/drawable";

/// Directory that receives relocated SVG files by default.
pub const DEFAULT_DESTINATION_DIR: &str = "app/src/main/res/raw";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
