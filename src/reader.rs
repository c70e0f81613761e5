//! Explicit, stateful chunked file reader.
//!
//! Replaces a generator-style "yield the next block" design: this carries
//! its own state (`window_tail`, bytes read so far) so a caller can step it
//! one block at a time without relying on a coroutine closing over a file
//! handle.

use std::io::{self, Read};

use crate::config::WINDOW_SIZE;

pub struct ChunkedReader<R> {
    reader: R,
    chunk_size: usize,
    window_tail: Vec<u8>,
}

impl<R: Read> ChunkedReader<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        ChunkedReader { reader, chunk_size, window_tail: Vec::new() }
    }

    /// Reads the next block, returning `(buffer, encode_start)` where
    /// `buffer` is `window_tail ++ new_bytes` and `encode_start` is the
    /// offset at which encoding should resume. Returns `None` at EOF.
    pub fn next_block(&mut self) -> io::Result<Option<(Vec<u8>, usize)>> {
        let mut chunk = vec![0u8; self.chunk_size];
        let n = read_fill(&mut self.reader, &mut chunk)?;
        if n == 0 {
            return Ok(None);
        }
        chunk.truncate(n);

        let encode_start = self.window_tail.len();
        let mut buffer = std::mem::take(&mut self.window_tail);
        buffer.extend_from_slice(&chunk);
        Ok(Some((buffer, encode_start)))
    }

    /// Records the last `WINDOW_SIZE` bytes of `buffer` as the tail to prime
    /// the next block's window.
    pub fn save_tail(&mut self, buffer: &[u8]) {
        let start = buffer.len().saturating_sub(WINDOW_SIZE);
        self.window_tail = buffer[start..].to_vec();
    }
}

/// Reads until `buf` is full or EOF, returning the number of bytes read
/// (mirrors the short-read tolerance of a real file/pipe source).
fn read_fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}
