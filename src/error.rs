//! Crate-level error types.

use std::fmt;

/// Errors produced by the molsketch crate.
///
/// Geometry synthesis and projection are infallible; errors only arise at
/// the edges (option files, drawing surfaces, frame scheduling).
#[derive(Debug)]
pub enum MolsketchError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The drawing surface rejected an operation.
    Surface(String),
    /// The frame scheduler could not queue or cancel a frame.
    Scheduler(String),
}

impl fmt::Display for MolsketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Surface(msg) => write!(f, "surface error: {msg}"),
            Self::Scheduler(msg) => write!(f, "scheduler error: {msg}"),
        }
    }
}

impl std::error::Error for MolsketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolsketchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
