use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Verify that two files have identical contents. Intended for checking a
/// decompressed file against the original.
#[derive(Parser, Debug)]
#[command(name = "verify")]
struct Args {
    file1: PathBuf,
    file2: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    lz77mt::logging::init(args.verbose);

    match lz77mt::verify(&args.file1, &args.file2) {
        Ok(true) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("nok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("verify: {e}");
            println!("nok");
            ExitCode::SUCCESS
        }
    }
}
