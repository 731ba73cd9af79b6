use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShfrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unsupported algorithm: {0}. Known ids are 0 (reverse), 1 (pair swap), 2 (xor)")]
    UnsupportedAlgorithm(u32),

    #[error("Decrypt requires an input with the .{} extension: {}", .marker, .path.display())]
    InvalidInputExtension { path: PathBuf, marker: &'static str },

    #[error("Cannot resolve a parent directory for {}", .0.display())]
    UnresolvableDirectory(PathBuf),

    #[error("Worker failure: {0}")]
    WorkerFailure(String),
}

pub type Result<T> = std::result::Result<T, ShfrError>;
