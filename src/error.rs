//! Centralized error handling for rsfetch

use std::fmt;
use std::io;

/// Failure modes of a single probe.
///
/// Every variant is recovered inside the owning fact extractor and mapped
/// to a sentinel display value; none of them propagate past the collectors.
#[derive(Debug)]
pub enum ProbeError {
    /// An expected resource was absent (pseudo-file, config file, ...)
    NotFound(String),
    /// An external program was missing or exited without usable output
    CommandFailed(String),
    /// Output was present but did not match any expected pattern
    ParseFailed(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::NotFound(what) => write!(f, "not found: {}", what),
            ProbeError::CommandFailed(what) => write!(f, "command failed: {}", what),
            ProbeError::ParseFailed(what) => write!(f, "parse failed: {}", what),
        }
    }
}

impl std::error::Error for ProbeError {}

impl From<io::Error> for ProbeError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => ProbeError::NotFound(error.to_string()),
            _ => ProbeError::CommandFailed(error.to_string()),
        }
    }
}

/// Type alias for probe results in rsfetch
pub type Result<T> = std::result::Result<T, ProbeError>;
