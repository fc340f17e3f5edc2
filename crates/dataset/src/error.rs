//! Dataset Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A dataset error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The snapshot file could not be read at all. Individual malformed
    /// lines are skipped, not raised.
    #[display("cannot read dataset snapshot: {}", _0.display())]
    Snapshot(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
