use crate::cli::paths::{replace_extension, MARKER_EXTENSION};
use crate::error::Result;
use crate::transform::TransformPlan;
use std::fs;
use std::path::{Path, PathBuf};

/// Encrypt a file in place: write the transformed bytes to a sibling
/// file under the marker extension, then remove the original.
/// Returns the output path.
///
/// If the write succeeds but the delete fails, the error is surfaced
/// and the output file is left on disk.
pub fn encrypt_file(input_path: &Path, plan: &TransformPlan) -> Result<PathBuf> {
    let output_path = replace_extension(input_path, MARKER_EXTENSION)?;

    plan.run(input_path, &output_path)?;
    fs::remove_file(input_path)?;

    Ok(output_path)
}
