use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lz77mt::{config, DEFAULT_DECOMPRESSED_FILENAME};

/// Decompress a file produced by the `compress` binary.
#[derive(Parser, Debug)]
#[command(name = "decompress")]
struct Args {
    /// Compressed file to decompress.
    input_file: PathBuf,

    /// Name of the decompressed output file.
    #[arg(short, long, default_value = DEFAULT_DECOMPRESSED_FILENAME)]
    outfile: PathBuf,

    /// Size, in bytes, of the chunks the compressed file is split into for
    /// parallel decompression (rounded up to a multiple of the token width).
    #[arg(short, long, default_value_t = config::CHUNK_SIZE)]
    chunk_size: usize,

    /// Number of worker ranks. Values below 2 run the sequential path.
    #[arg(short = 'j', long, default_value_t = config::default_workers())]
    workers: usize,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    lz77mt::logging::init(args.verbose);

    lz77mt::decompress(&args.input_file, &args.outfile, args.chunk_size, args.workers)
        .with_context(|| {
            format!(
                "failed to decompress {} into {}",
                args.input_file.display(),
                args.outfile.display()
            )
        })?;

    tracing::info!(
        input = %args.input_file.display(),
        output = %args.outfile.display(),
        workers = args.workers,
        "decompression complete"
    );
    Ok(())
}
