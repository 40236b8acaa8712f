//! Fact extractors, one `detect_*` entry point per fact.
//!
//! Every extractor follows the same shape: platform dispatch, one or more
//! probes, best-effort parsing, sentinel on failure. None of them may
//! abort the run.

pub mod desktop;
pub mod hardware;
pub mod packages;
pub mod system;

/// Sentinel for facts that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for facts that are meaningless on the current platform
/// (e.g. display resolution on a headless box).
pub const NOT_AVAILABLE: &str = "N/A";
