use crate::cipher::Algorithm;
use crate::error::{Result, ShfrError};
use crate::partition;
use std::fs;
use std::path::Path;
use std::thread;

/// Worker count for the in-memory strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    pub workers: usize,
}

impl WorkerPool {
    /// Pool with an explicit worker count, never below one
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Size the pool from the platform: physical cores when reported,
    /// otherwise half the logical count, never below one.
    pub fn detect() -> Self {
        let physical = num_cpus::get_physical();
        let workers = if physical > 0 {
            physical
        } else {
            num_cpus::get() / 2
        };
        Self::new(workers)
    }
}

/// Apply `algorithm` to `data` by fanning disjoint partitions out
/// across the pool and reassembling results in partition order.
///
/// Every transform, reversal included, runs against its own partition
/// in isolation here. For multi-partition inputs that makes reversal
/// diverge from the streaming strategy's global reversal; both outputs
/// are deterministic and the divergence is covered by tests.
pub fn transform_in_memory(data: &[u8], algorithm: Algorithm, pool: &WorkerPool) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let partitions = partition::split(data.len(), pool.workers);
    let mut results: Vec<Vec<u8>> = Vec::with_capacity(partitions.len());

    thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = partitions
            .iter()
            .map(|part| {
                let segment = &data[part.range.clone()];
                scope.spawn(move || algorithm.apply(segment))
            })
            .collect();

        // Joining in spawn order is the barrier: results land at their
        // pre-assigned partition index, never in completion order.
        for (index, handle) in handles.into_iter().enumerate() {
            let transformed = handle
                .join()
                .map_err(|_| ShfrError::WorkerFailure(format!("worker {index} panicked")))?;
            results.push(transformed);
        }
        Ok(())
    })?;

    Ok(results.concat())
}

/// Transform a whole file in memory. The output file is written only
/// after every worker has completed.
pub fn transform_parallel(
    input: &Path,
    output: &Path,
    algorithm: Algorithm,
    pool: &WorkerPool,
) -> Result<u64> {
    let data = fs::read(input)?;
    let transformed = transform_in_memory(&data, algorithm, pool)?;
    fs::write(output, &transformed)?;
    Ok(transformed.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Algorithm;
    use std::fs;
    use tempfile::tempdir;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 11 + 29) % 256) as u8).collect()
    }

    #[test]
    fn test_worker_pool_minimum_one() {
        assert_eq!(WorkerPool::new(0).workers, 1);
        assert_eq!(WorkerPool::new(6).workers, 6);
        assert!(WorkerPool::detect().workers >= 1);
    }

    #[test]
    fn test_xor_matches_single_shot_any_pool() {
        let data = pattern(1000);
        let expected = Algorithm::Xor.apply(&data);
        for workers in [1, 2, 3, 7, 16] {
            let pool = WorkerPool::new(workers);
            assert_eq!(transform_in_memory(&data, Algorithm::Xor, &pool).unwrap(), expected);
        }
    }

    #[test]
    fn test_reassembly_preserves_partition_order() {
        // XOR is position independent, so any ordering mistake in
        // reassembly shows up as a byte-level mismatch.
        let data = pattern(4097);
        let pool = WorkerPool::new(8);
        let transformed = transform_in_memory(&data, Algorithm::Xor, &pool).unwrap();
        let restored = transform_in_memory(&transformed, Algorithm::Xor, &pool).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn test_reversal_is_chunk_local_here() {
        let data: Vec<u8> = (0..12).collect();
        let pool = WorkerPool::new(3);

        // Partitions of 4 bytes each reverse independently.
        let expected = vec![3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8];
        assert_eq!(transform_in_memory(&data, Algorithm::Reverse, &pool).unwrap(), expected);
    }

    #[test]
    fn test_reversal_single_worker_is_global() {
        let data = pattern(100);
        let pool = WorkerPool::new(1);
        let expected: Vec<u8> = data.iter().rev().copied().collect();
        assert_eq!(transform_in_memory(&data, Algorithm::Reverse, &pool).unwrap(), expected);
    }

    #[test]
    fn test_reversal_deterministic_across_runs() {
        let data = pattern(509);
        let pool = WorkerPool::new(4);
        let first = transform_in_memory(&data, Algorithm::Reverse, &pool).unwrap();
        let second = transform_in_memory(&data, Algorithm::Reverse, &pool).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pair_swap_odd_partition_reanchors_pairs() {
        // 9 bytes over 3 workers gives three odd partitions; each
        // carries its own unpaired tail, unlike the single-shot swap.
        let data: Vec<u8> = (1..=9).collect();
        let pool = WorkerPool::new(3);
        let swapped = transform_in_memory(&data, Algorithm::PairSwap, &pool).unwrap();
        assert_eq!(swapped, vec![2, 1, 3, 5, 4, 6, 8, 7, 9]);
        assert_ne!(swapped, Algorithm::PairSwap.apply(&data));
    }

    #[test]
    fn test_length_preserved() {
        let pool = WorkerPool::new(5);
        for len in [1, 4, 5, 127, 1024] {
            let data = pattern(len);
            for algorithm in [Algorithm::Reverse, Algorithm::PairSwap, Algorithm::Xor] {
                assert_eq!(transform_in_memory(&data, algorithm, &pool).unwrap().len(), len);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let pool = WorkerPool::new(4);
        for algorithm in [Algorithm::Reverse, Algorithm::PairSwap, Algorithm::Xor] {
            assert!(transform_in_memory(&[], algorithm, &pool).unwrap().is_empty());
        }
    }

    #[test]
    fn test_transform_file_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let middle = dir.path().join("middle.bin");
        let restored = dir.path().join("restored.bin");

        let data = pattern(10_000);
        fs::write(&input, &data).unwrap();

        let pool = WorkerPool::new(4);
        let written = transform_parallel(&input, &middle, Algorithm::Xor, &pool).unwrap();
        assert_eq!(written, data.len() as u64);

        transform_parallel(&middle, &restored, Algorithm::Xor, &pool).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn test_transform_file_zero_length() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, b"").unwrap();

        let pool = WorkerPool::new(4);
        let written = transform_parallel(&input, &output, Algorithm::Reverse, &pool).unwrap();
        assert_eq!(written, 0);
        assert!(fs::read(&output).unwrap().is_empty());
    }
}
