//! Structured logging setup, initialized once per binary.
//!
//! Replaces a process-wide mutable debug flag with a `tracing` subscriber
//! configured at startup; verbosity is controlled by a repeatable `-v` flag
//! rather than a global that call sites flip at arbitrary points.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes the global `tracing` subscriber. `verbosity` is the number
/// of times `-v` was passed on the command line (0 = warnings only).
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
