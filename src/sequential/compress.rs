//! Sequential, whole-file LZ77 compressor. Also the building block the
//! parallel compressor calls once per chunk.

use std::io::{Read, Write};

use crate::config::{CHUNK_SIZE, WINDOW_SIZE};
use crate::error::Error;
use crate::matcher::find_match;
use crate::reader::ChunkedReader;
use crate::token::Token;

/// Encodes `buffer[encode_start..]` against the window
/// `buffer[p.saturating_sub(WINDOW_SIZE)..p]`, advancing the cursor by
/// `max(1, token.length())` each step — a reference token's `next_byte` is
/// deliberately re-examined as the start of the next match attempt rather
/// than skipped, which keeps this byte-identical to the parallel adapter
/// calling the same function per chunk.
///
/// The window must be capped to `WINDOW_SIZE` bytes: the matcher's
/// left-to-right scan prefers the most distant occurrence, so an
/// uncapped window would hand it offsets beyond what a 3-byte token can
/// encode once `p` exceeds `WINDOW_SIZE`.
pub fn compress_chunk(buffer: &[u8], encode_start: usize) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let mut p = encode_start;
    while p < buffer.len() {
        let window = &buffer[p.saturating_sub(WINDOW_SIZE)..p];
        let lookahead = &buffer[p..];
        let token = find_match(window, lookahead);
        out.extend_from_slice(&token.pack()?);
        p += token.length().max(1);
    }
    Ok(out)
}

/// Compresses `input` to `output`, reading in `chunk_size`-byte blocks and
/// keeping exactly the window-sized tail of each block as the primer for
/// the next.
pub fn compress_sequential<R: Read, W: Write>(
    input: R,
    mut output: W,
    chunk_size: usize,
) -> Result<(), Error> {
    let mut reader = ChunkedReader::new(input, chunk_size);
    while let Some((buffer, encode_start)) = reader.next_block()? {
        let tokens = compress_chunk(&buffer, encode_start)?;
        output.write_all(&tokens)?;
        reader.save_tail(&buffer);
    }
    Ok(())
}

/// Convenience entry point using the default block size.
pub fn compress_sequential_default<R: Read, W: Write>(input: R, output: W) -> Result<(), Error> {
    compress_sequential(input, output, CHUNK_SIZE)
}
