//! SHFR - Reversible Byte-Level File Transforms
//!
//! A command-line utility that transforms files in place through one of
//! three trivially invertible byte transforms, writing the result under
//! a derived filename and removing the original. These are obfuscations,
//! not encryption: there is no key management, authentication, or
//! confidentiality.
//!
//! ## Transforms
//!
//! | id | transform            | locality        |
//! |----|----------------------|-----------------|
//! | 0  | byte-order reversal  | whole-file only |
//! | 1  | adjacent pair swap   | chunk-local     |
//! | 2  | XOR with key `0x55`  | chunk-local     |
//!
//! ## Execution Strategies
//!
//! ```text
//! streaming:  read buffer -> transform -> write   (4 MiB bound, sequential;
//!             reversal streams tail-first and reverses each buffer)
//!
//! parallel:   read file -> partition -> N workers -> join by index -> write
//!             (whole file in memory, one scoped thread per partition)
//! ```
//!
//! The two strategies agree for chunk-local transforms. For reversal
//! they intentionally diverge: streaming performs the true global
//! reversal, while the parallel strategy reverses within each partition
//! only. Both behaviors are deterministic and kept as-is for
//! compatibility.
//!
//! ## Example
//!
//! ```no_run
//! use shfr::cipher::Algorithm;
//! use shfr::cli::{decrypt_file, encrypt_file};
//! use shfr::strategy::WorkerPool;
//! use shfr::transform::{Strategy, TransformPlan};
//! use std::path::Path;
//!
//! let plan = TransformPlan::new(Algorithm::Xor, Strategy::Streaming, WorkerPool::detect());
//!
//! // notes.txt -> notes.shfr (original removed)
//! let encrypted = encrypt_file(Path::new("notes.txt"), &plan).unwrap();
//!
//! // notes.shfr -> notes.txt (marker file removed)
//! decrypt_file(&encrypted, "txt", &plan).unwrap();
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod partition;
pub mod strategy;
pub mod transform;

pub use cipher::{Algorithm, Locality};
pub use error::{Result, ShfrError};
pub use strategy::WorkerPool;
pub use transform::{Strategy, TransformPlan};
