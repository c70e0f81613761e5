//! Chunk-parallel decompressor.
//!
//! Phase 1 (in `decode_chunk_local`) decodes a chunk's tokens against an
//! initially-empty local buffer, recording any back-reference that reaches
//! past the start of the local buffer as "unresolved" and filling its span
//! with [`FILLER_BYTE`].
//!
//! Phase 2 (`resolve_chunk`, installed as the coordinator/worker
//! framework's pre-write resolution step) runs once every earlier chunk has
//! been written, reads the last `WINDOW_SIZE` bytes of the output file so
//! far, and patches each unresolved entry in order against
//! `prior_window ++ local`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::chunk;
use crate::config::{FILLER_BYTE, TOKEN_WIDTH, WINDOW_SIZE};
use crate::coordinator::{run_parallel, ChunkResult, SharedOutput};
use crate::error::Error;
use crate::token::Token;

#[derive(Debug, Clone)]
struct UnresolvedRef {
    /// Offset into `local` where this reference's copy begins.
    position: usize,
    offset: u16,
    length: u8,
}

pub struct DecodedChunk {
    local: Vec<u8>,
    unresolved: Vec<UnresolvedRef>,
}

impl ChunkResult for DecodedChunk {
    fn into_bytes(self) -> Vec<u8> {
        self.local
    }
}

/// Phase 1: local decode with placeholders for references that reach
/// outside this chunk's own (initially empty) buffer.
fn decode_chunk_local(tokens: &[u8]) -> Result<DecodedChunk, Error> {
    if tokens.len() % TOKEN_WIDTH != 0 {
        return Err(Error::CorruptedStream(format!(
            "chunk length {} is not a multiple of the token width",
            tokens.len()
        )));
    }

    let mut local: Vec<u8> = Vec::new();
    let mut unresolved: Vec<UnresolvedRef> = Vec::new();

    for raw in tokens.chunks(TOKEN_WIDTH) {
        let token = Token::unpack([raw[0], raw[1], raw[2]])?;
        match token {
            Token::Literal(b) => local.push(b),
            Token::Reference { offset, length, next_byte } => {
                if offset == 0 {
                    return Err(Error::CorruptedStream(
                        "reference token has offset 0".into(),
                    ));
                }
                let offset_usize = offset as usize;
                let match_start = local.len() as isize - offset_usize as isize;

                let locally_resolvable = match_start >= 0
                    && !intersects_unresolved(&unresolved, match_start as usize, length as usize);

                if locally_resolvable {
                    let match_start = match_start as usize;
                    for i in 0..length as usize {
                        let b = local[match_start + i];
                        local.push(b);
                    }
                } else {
                    unresolved.push(UnresolvedRef { position: local.len(), offset, length });
                    local.extend(std::iter::repeat(FILLER_BYTE).take(length as usize));
                }
                local.push(next_byte);
            }
        }
    }

    Ok(DecodedChunk { local, unresolved })
}

/// Full interval-overlap check across every recorded unresolved entry, not
/// just the nearest one: a copy range that overlaps any unresolved span
/// would read filler bytes rather than real data.
fn intersects_unresolved(unresolved: &[UnresolvedRef], start: usize, length: usize) -> bool {
    let end = start + length;
    unresolved.iter().any(|u| {
        let u_end = u.position + u.length as usize;
        start < u_end && u.position < end
    })
}

/// Phase 2: patch `decoded`'s unresolved entries using the window of
/// already-written output plus the chunk's own local bytes.
fn resolve_chunk(chunk_number: usize, decoded: &mut DecodedChunk, output: &SharedOutput) -> Result<(), Error> {
    if chunk_number == 0 || decoded.unresolved.is_empty() {
        return Ok(());
    }

    let prior_window = output.tail(WINDOW_SIZE)?;
    let prior_len = prior_window.len();
    let mut resolve_buffer = prior_window;
    resolve_buffer.extend_from_slice(&decoded.local);

    let unresolved = decoded.unresolved.clone();
    for u in &unresolved {
        let offset = u.offset as usize;
        if offset > prior_len + u.position {
            return Err(Error::CorruptedStream(format!(
                "reference offset {offset} exceeds the available window at chunk-local position {}",
                u.position
            )));
        }
        let src = prior_len + u.position - offset;
        for k in 0..u.length as usize {
            let b = resolve_buffer[src + k];
            let dst = prior_len + u.position + k;
            resolve_buffer[dst] = b;
            decoded.local[u.position + k] = b;
        }
    }
    Ok(())
}

pub fn decompress_parallel(
    input_path: &Path,
    output_path: &Path,
    chunk_size: usize,
    num_workers: usize,
) -> Result<(), Error> {
    if chunk_size == 0 {
        return Err(Error::InvalidArgument("chunk size must be greater than zero".into()));
    }
    let chunk_size = chunk::normalize_decompress_chunk_size(chunk_size);
    let file_size = std::fs::metadata(input_path)
        .map_err(|e| Error::io(input_path, e))?
        .len();
    if file_size % TOKEN_WIDTH as u64 != 0 {
        return Err(Error::CorruptedStream(format!(
            "compressed file length {file_size} is not a multiple of the token width"
        )));
    }
    let total = chunk::total_chunks(file_size, chunk_size as u64);
    let output = SharedOutput::create(output_path)?;

    let processor = |n: usize| -> Result<DecodedChunk, Error> {
        let range = chunk::chunk_range(n, chunk_size as u64, file_size);
        let mut file = File::open(input_path).map_err(|e| Error::io(input_path, e))?;
        let mut buf = vec![0u8; (range.end - range.start) as usize];
        use std::io::{Seek, SeekFrom};
        file.seek(SeekFrom::Start(range.start))?;
        file.read_exact(&mut buf)?;
        decode_chunk_local(&buf)
    };

    let resolve: &(dyn Fn(usize, &mut DecodedChunk, &SharedOutput) -> Result<(), Error> + Sync) =
        &resolve_chunk;

    run_parallel(total, num_workers, &output, processor, Some(resolve))
}
