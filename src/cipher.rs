use crate::error::{Result, ShfrError};

/// Fixed key for the XOR transform
pub const XOR_KEY: u8 = 0x55;

/// Transform selected by numeric id on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// id 0: full byte-order reversal
    Reverse,
    /// id 1: adjacent byte-pair swap
    PairSwap,
    /// id 2: XOR against [`XOR_KEY`]
    Xor,
}

/// Whether a transform may be applied to arbitrary contiguous segments
/// independently, or only produces the correct result over the full file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locality {
    ChunkLocal,
    WholeFile,
}

impl Algorithm {
    /// Resolve a numeric algorithm id. Unknown ids are a usage error,
    /// never a fallback.
    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            0 => Ok(Self::Reverse),
            1 => Ok(Self::PairSwap),
            2 => Ok(Self::Xor),
            other => Err(ShfrError::UnsupportedAlgorithm(other)),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Self::Reverse => 0,
            Self::PairSwap => 1,
            Self::Xor => 2,
        }
    }

    pub fn locality(&self) -> Locality {
        match self {
            Self::Reverse => Locality::WholeFile,
            Self::PairSwap | Self::Xor => Locality::ChunkLocal,
        }
    }

    /// Apply the transform to one segment in isolation.
    /// Output length always equals input length.
    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Reverse => reverse(data),
            Self::PairSwap => swap_pairs(data),
            Self::Xor => xor_cipher(data, XOR_KEY),
        }
    }
}

fn reverse(data: &[u8]) -> Vec<u8> {
    data.iter().rev().copied().collect()
}

/// Swap each even-indexed byte with its successor; an unpaired final
/// byte passes through unchanged.
fn swap_pairs(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    let mut pairs = data.chunks_exact(2);
    for pair in &mut pairs {
        result.push(pair[1]);
        result.push(pair[0]);
    }
    result.extend_from_slice(pairs.remainder());
    result
}

fn xor_cipher(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}
