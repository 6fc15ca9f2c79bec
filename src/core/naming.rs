// SvgSweep - core/naming.rs
//
// Destination name derivation. The stem of the source name is kept as-is and
// the extension (if any) is replaced with `.svg`.

use crate::util::constants;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// `icon.png` -> `icon.svg`, `a.b.webp` -> `a.b.svg`, `noext` -> `noext.svg`.
///
/// Leading-dot names keep their dot: `.hidden` -> `.hidden.svg`.
pub fn svg_file_name(file_name: &OsStr) -> OsString {
    let stem = Path::new(file_name).file_stem().unwrap_or(file_name);
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(constants::SVG_EXTENSION);
    name
}

/// Full destination path for `source` inside `destination_dir`.
///
/// Returns `None` when `source` has no final component (e.g. `..`).
pub fn destination_path(source: &Path, destination_dir: &Path) -> Option<PathBuf> {
    source
        .file_name()
        .map(|name| destination_dir.join(svg_file_name(name)))
}
