use crate::cipher::Algorithm;
use crate::error::{Result, ShfrError};
use crate::strategy::{transform_parallel, transform_streaming, WorkerPool};
use std::path::Path;

/// Execution discipline for one file transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Sequential bounded-buffer I/O, memory use independent of file size
    #[default]
    Streaming,
    /// Whole file in memory, fanned out across the worker pool
    Parallel,
}

impl std::str::FromStr for Strategy {
    type Err = ShfrError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "streaming" => Ok(Self::Streaming),
            "parallel" => Ok(Self::Parallel),
            _ => Err(ShfrError::InvalidArguments(format!("strategy: {}", s))),
        }
    }
}

/// Everything needed to process one file: the transform, the execution
/// discipline, and the worker pool. Built once per invocation and
/// dropped with it.
#[derive(Debug, Clone, Copy)]
pub struct TransformPlan {
    pub algorithm: Algorithm,
    pub strategy: Strategy,
    pub pool: WorkerPool,
}

impl TransformPlan {
    pub fn new(algorithm: Algorithm, strategy: Strategy, pool: WorkerPool) -> Self {
        Self {
            algorithm,
            strategy,
            pool,
        }
    }

    /// Run the plan against `input`, writing the result to `output`.
    /// Returns the number of bytes written.
    pub fn run(&self, input: &Path, output: &Path) -> Result<u64> {
        match self.strategy {
            Strategy::Streaming => transform_streaming(input, output, self.algorithm),
            Strategy::Parallel => transform_parallel(input, output, self.algorithm, &self.pool),
        }
    }
}
