use crate::cli::paths::{has_marker_extension, replace_extension, MARKER_EXTENSION};
use crate::error::{Result, ShfrError};
use crate::transform::TransformPlan;
use std::fs;
use std::path::{Path, PathBuf};

/// Decrypt a transformed file in place: the input must carry the
/// marker extension; the restored bytes are written to a sibling file
/// under `extension`, then the input is removed.
/// Returns the output path.
///
/// The extension check runs before any byte of the input is read.
pub fn decrypt_file(input_path: &Path, extension: &str, plan: &TransformPlan) -> Result<PathBuf> {
    if !has_marker_extension(input_path) {
        return Err(ShfrError::InvalidInputExtension {
            path: input_path.to_path_buf(),
            marker: MARKER_EXTENSION,
        });
    }

    let output_path = replace_extension(input_path, extension)?;

    plan.run(input_path, &output_path)?;
    fs::remove_file(input_path)?;

    Ok(output_path)
}
