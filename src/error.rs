//! Library-level error type.
//!
//! Kept as a hand-written enum rather than a derive-macro error type: the
//! four kinds below are the complete, stable taxonomy the rest of the crate
//! matches on, and callers outside this crate only need `Display` and
//! `std::error::Error`, not a derive dependency.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// An underlying file or channel operation failed.
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    /// The compressed stream is malformed: wrong length, an out-of-range
    /// reference, or (in the parallel decompressor) an unresolvable
    /// back-reference.
    CorruptedStream(String),
    /// A caller-supplied argument is out of range (zero chunk size, zero
    /// worker count, and so on).
    InvalidArgument(String),
    /// An internal invariant was violated — a programmer error, not a
    /// data-dependent failure. Not expected to be caught by normal control
    /// flow.
    InvariantViolated(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path: Some(p), source } => {
                write!(f, "I/O error on {}: {}", p.display(), source)
            }
            Error::Io { path: None, source } => write!(f, "I/O error: {}", source),
            Error::CorruptedStream(msg) => write!(f, "corrupted stream: {msg}"),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::InvariantViolated(msg) => write!(f, "invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
