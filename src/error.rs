//! Top-level error type for the `tome` binary.

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("configuration error")]
    Config,
    #[display("dataset error")]
    Dataset,
    #[display("no dataset snapshot configured (set dataset.snapshot in tome.toml)")]
    NoSnapshot,
    #[display("library database error")]
    Store,
    #[display("import error")]
    Import,
    /// A command-line argument was out of range or inconsistent.
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[error(not(source))] String),
}
