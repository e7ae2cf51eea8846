//! Output file naming.

use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of the adjusted file.
pub const ADJUSTED_SUFFIX: &str = "_adjusted";

/// Derive the adjusted output path from the input path.
///
/// `.xlsx` inputs keep their extension. Anything else is treated as `.xls`:
/// a trailing `.xls` is stripped if present and `.xls` is appended.
#[must_use]
pub fn adjusted_path(input: &Path) -> PathBuf {
    let name = input.as_os_str().to_string_lossy();
    let ext = if name.ends_with(".xlsx") { ".xlsx" } else { ".xls" };
    let base = name.strip_suffix(ext).unwrap_or(&*name);
    PathBuf::from(format!("{base}{ADJUSTED_SUFFIX}{ext}"))
}
