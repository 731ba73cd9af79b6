use crate::error::{Result, ShfrError};
use std::path::{Path, PathBuf};

/// Extension marking a transformed file
pub const MARKER_EXTENSION: &str = "shfr";

/// Derive the sibling output path for `input`, replacing its extension.
/// A leading dot on `extension` is stripped and re-added canonically.
pub fn replace_extension(input: &Path, extension: &str) -> Result<PathBuf> {
    let dir = input
        .parent()
        .ok_or_else(|| ShfrError::UnresolvableDirectory(input.to_path_buf()))?;
    let stem = input.file_stem().ok_or_else(|| {
        ShfrError::InvalidArguments(format!("no file name in {}", input.display()))
    })?;

    let mut name = stem.to_os_string();
    name.push(".");
    name.push(extension.trim_start_matches('.'));
    Ok(dir.join(name))
}

/// True when `path` carries the marker extension
pub fn has_marker_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == MARKER_EXTENSION)
}
