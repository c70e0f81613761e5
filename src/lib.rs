//! A dictionary compressor and matching decompressor built on the LZ77
//! sliding-window algorithm, with a sequential core and a chunk-parallel
//! variant coordinated by a small message-passing framework.

pub mod chunk;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod parallel;
pub mod reader;
pub mod sequential;
pub mod token;

pub use error::Error;

use std::path::Path;

use config::{CHUNK_SIZE, DEFAULT_COMPRESSED_NAME, DEFAULT_DECOMPRESSED_NAME};

/// Compresses `input_path` to `output_path`. `num_workers < 2` runs the
/// sequential path directly; both are defined to produce byte-identical
/// output.
pub fn compress(
    input_path: &Path,
    output_path: &Path,
    chunk_size: usize,
    num_workers: usize,
) -> Result<(), Error> {
    if num_workers < 2 {
        let input = std::fs::File::open(input_path).map_err(|e| Error::io(input_path, e))?;
        let output = std::fs::File::create(output_path).map_err(|e| Error::io(output_path, e))?;
        sequential::compress::compress_sequential(input, output, chunk_size)
    } else {
        parallel::compress::compress_parallel(input_path, output_path, chunk_size, num_workers)
    }
}

/// Decompresses `input_path` to `output_path`. `num_workers < 2` runs the
/// sequential path directly.
pub fn decompress(
    input_path: &Path,
    output_path: &Path,
    chunk_size: usize,
    num_workers: usize,
) -> Result<(), Error> {
    if num_workers < 2 {
        let input = std::fs::File::open(input_path).map_err(|e| Error::io(input_path, e))?;
        let output = std::fs::File::create(output_path).map_err(|e| Error::io(output_path, e))?;
        sequential::decompress::decompress_sequential(input, output)
    } else {
        parallel::decompress::decompress_parallel(input_path, output_path, chunk_size, num_workers)
    }
}

/// Byte-for-byte equality of two files, short-circuiting on the first
/// mismatch or on a length difference (a naive paired-iterator zip would
/// silently call a file and its own truncated prefix equal).
pub fn verify(path1: &Path, path2: &Path) -> Result<bool, Error> {
    use std::io::Read;

    let mut f1 = std::fs::File::open(path1).map_err(|e| Error::io(path1, e))?;
    let mut f2 = std::fs::File::open(path2).map_err(|e| Error::io(path2, e))?;

    let mut buf1 = [0u8; 64 * 1024];
    let mut buf2 = [0u8; 64 * 1024];
    loop {
        let n1 = f1.read(&mut buf1).map_err(|e| Error::io(path1, e))?;
        let n2 = f2.read(&mut buf2).map_err(|e| Error::io(path2, e))?;
        if n1 != n2 {
            return Ok(false);
        }
        if n1 == 0 {
            return Ok(true);
        }
        if buf1[..n1] != buf2[..n2] {
            return Ok(false);
        }
    }
}

pub const DEFAULT_CHUNK_SIZE: usize = CHUNK_SIZE;
pub const DEFAULT_COMPRESSED_FILENAME: &str = DEFAULT_COMPRESSED_NAME;
pub const DEFAULT_DECOMPRESSED_FILENAME: &str = DEFAULT_DECOMPRESSED_NAME;
