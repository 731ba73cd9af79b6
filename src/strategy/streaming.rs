use crate::cipher::{Algorithm, Locality};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Fixed working-buffer size for streaming transforms (4 MiB)
pub const BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Transform `input` into `output` sequentially with bounded memory.
/// Returns the number of bytes written.
///
/// Chunk-local transforms stream forward buffer by buffer. Whole-file
/// reversal streams backward from the file end, reversing each buffer
/// before writing, which reproduces the global reversal without
/// materializing the file.
pub fn transform_streaming(input: &Path, output: &Path, algorithm: Algorithm) -> Result<u64> {
    transform_streaming_with_buffer(input, output, algorithm, BUFFER_SIZE)
}

/// Same as [`transform_streaming`] with a caller-chosen buffer size.
///
/// Buffer boundaries are segment boundaries for chunk-local transforms:
/// an odd buffer size makes pair swap re-anchor its pairs at every
/// buffer, so the default even buffer size is what keeps streaming
/// output identical to a single-shot swap.
pub fn transform_streaming_with_buffer(
    input: &Path,
    output: &Path,
    algorithm: Algorithm,
    buffer_size: usize,
) -> Result<u64> {
    let buffer_size = buffer_size.max(1);
    match algorithm.locality() {
        Locality::ChunkLocal => stream_forward(input, output, algorithm, buffer_size),
        Locality::WholeFile => reverse_backward(input, output, buffer_size),
    }
}

fn stream_forward(
    input: &Path,
    output: &Path,
    algorithm: Algorithm,
    buffer_size: usize,
) -> Result<u64> {
    let mut reader = File::open(input)?;
    let mut writer = BufWriter::new(File::create(output)?);

    let mut buffer = vec![0u8; buffer_size];
    let mut written = 0u64;

    loop {
        let filled = fill_buffer(&mut reader, &mut buffer)?;
        if filled == 0 {
            break;
        }
        let processed = algorithm.apply(&buffer[..filled]);
        writer.write_all(&processed)?;
        written += processed.len() as u64;
    }

    writer.flush()?;
    Ok(written)
}

fn reverse_backward(input: &Path, output: &Path, buffer_size: usize) -> Result<u64> {
    let mut reader = File::open(input)?;
    let mut writer = BufWriter::new(File::create(output)?);

    let len = reader.metadata()?.len();
    let mut buffer = vec![0u8; buffer_size];
    let mut pos = len;

    while pos > 0 {
        let read_size = pos.min(buffer_size as u64) as usize;
        pos -= read_size as u64;

        reader.seek(SeekFrom::Start(pos))?;
        reader.read_exact(&mut buffer[..read_size])?;

        buffer[..read_size].reverse();
        writer.write_all(&buffer[..read_size])?;
    }

    writer.flush()?;
    Ok(len)
}

/// Read until the buffer is full or EOF, so segment boundaries land at
/// exact multiples of the buffer size regardless of short reads.
fn fill_buffer(reader: &mut impl Read, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        let n = reader.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
