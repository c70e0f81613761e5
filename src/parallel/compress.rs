//! Chunk-parallel compressor. Each worker opens its own handle on the input
//! file, reads its priming window plus its chunk, and calls the same
//! [`crate::sequential::compress::compress_chunk`] the sequential path
//! uses — so the output is byte-identical regardless of chunk size or
//! worker count (the strongest testable property of this system).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::chunk;
use crate::config::WINDOW_SIZE;
use crate::coordinator::{run_parallel, SharedOutput};
use crate::error::Error;
use crate::sequential::compress::compress_chunk;

pub fn compress_parallel(
    input_path: &Path,
    output_path: &Path,
    chunk_size: usize,
    num_workers: usize,
) -> Result<(), Error> {
    if chunk_size == 0 {
        return Err(Error::InvalidArgument("chunk size must be greater than zero".into()));
    }
    let file_size = std::fs::metadata(input_path)
        .map_err(|e| Error::io(input_path, e))?
        .len();
    let total = chunk::total_chunks(file_size, chunk_size as u64);
    let output = SharedOutput::create(output_path)?;

    let processor = |n: usize| -> Result<Vec<u8>, Error> {
        let range = chunk::chunk_range(n, chunk_size as u64, file_size);
        let primer_start = range.start.saturating_sub(WINDOW_SIZE as u64);
        let primer_len = (range.start - primer_start) as usize;
        let total_len = primer_len + (range.end - range.start) as usize;

        let mut file = File::open(input_path).map_err(|e| Error::io(input_path, e))?;
        let mut buffer = vec![0u8; total_len];
        read_exact_at(&mut file, primer_start, &mut buffer)?;

        compress_chunk(&buffer, primer_len)
    };

    run_parallel::<Vec<u8>, _>(total, num_workers, &output, processor, None)
}

fn read_exact_at(file: &mut File, offset: u64, buf: &mut [u8]) -> Result<(), Error> {
    use std::io::{Seek, SeekFrom};
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(buf)?;
    Ok(())
}
