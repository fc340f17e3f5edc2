//! Error types for the import pipeline.
//!
//! Uses [`exn`] for automatic location tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An import error with automatic location tracking via [`exn::Exn`].
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies the origin of an import failure.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The source file could not be read or was not valid UTF-8 text.
    #[display("unreadable source file: ({})", _0.display())]
    SourceFile(#[error(not(source))] PathBuf),
    /// The source contained no text after cleaning.
    #[display("source file is empty")]
    EmptySource,
    /// Writing the imported book to the library database failed.
    #[display("library database error")]
    Store,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
