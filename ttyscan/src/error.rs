//! Error types for ttyscan.

use std::io;
use thiserror::Error;

/// Result type for ttyscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ttyscan operations.
///
/// Enumeration itself never fails: per-device problems are absorbed into
/// fallback values. These variants surface from the lower-level helpers and
/// from the lookup conveniences built on top of enumeration.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (sysfs attribute or symlink access).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed glob pattern.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// No port matched the lookup.
    #[error("No matching serial port found")]
    DeviceNotFound,
}
