//! Compile-time constants for the token format and chunking scheme.
//!
//! Everything here is a plain constant rather than a runtime-configurable
//! value because the binary token layout is fixed by the on-disk format:
//! changing `OFFSET_BITS` or `LENGTH_BITS` changes what a compressed file
//! *means*, not just how fast it is produced.

/// Width in bits of the `length` field of a packed token.
pub const LENGTH_BITS: u32 = 6;

/// Width in bits of the `offset` field of a packed token.
pub const OFFSET_BITS: u32 = 9;

/// Sliding window size: the maximum backward distance a reference can span.
/// Equal to `2^OFFSET_BITS - 1` since offset 0 is reserved for literals.
pub const WINDOW_SIZE: usize = (1 << OFFSET_BITS) - 1;

/// Maximum match length encodable in a single reference token.
pub const MAX_LENGTH: usize = (1 << LENGTH_BITS) - 1;

/// Matches shorter than this are not worth emitting as a reference; the
/// matcher also uses this as its early-termination threshold.
pub const LENGTH_THRESHOLD: usize = 2;

/// Width in bytes of one packed token on disk.
pub const TOKEN_WIDTH: usize = 3;

/// Default read block size for the sequential codec and chunk size for the
/// parallel adapters.
pub const CHUNK_SIZE: usize = 65536;

/// Placeholder byte written into a parallel-decompression chunk's local
/// buffer in place of bytes that can only be resolved once prior chunks
/// have been written.
pub const FILLER_BYTE: u8 = 0xFF;

/// Default compressed-output filename for the compressor binary.
pub const DEFAULT_COMPRESSED_NAME: &str = "comprimido.elmejorprofesor";

/// Default decompressed-output filename for the decompressor binary.
pub const DEFAULT_DECOMPRESSED_NAME: &str = "descomprimido-elmejorprofesor.txt";

/// Number of worker ranks to use when `--workers` is not given on the CLI.
/// `1` means "run the sequential path"; anything else spins up the
/// coordinator/worker framework with that many worker ranks.
pub fn default_workers() -> usize {
    num_cpus::get().max(1)
}
