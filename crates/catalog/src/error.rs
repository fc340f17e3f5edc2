//! Catalogue Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A catalogue error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalogue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record could not be normalized into a [`BookRecord`](crate::BookRecord).
    ///
    /// Callers scanning a whole store should skip the record and continue;
    /// a single bad record never aborts a query.
    #[display("malformed record: {_0}")]
    MalformedRecord(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A record is either well-formed or it isn't.
        false
    }
}
