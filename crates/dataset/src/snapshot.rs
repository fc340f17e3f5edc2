//! Dataset snapshot parsing.
//!
//! A snapshot is a line-oriented export of a public-domain book dataset.
//! Rows come in two shapes, detected per line:
//!
//! - a JSON object (`{"title": …, "author": …, "year": …, "ocaid": …}`), or
//! - a pipe-delimited string (`title|author|year|page_count|id|url`).

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::fs;
use std::path::Path;
use tome_catalog::{BookRecord, RawRecord};
use tracing::{info, warn};

/// A parsed dataset snapshot: the bulk-loaded record set plus a count of
/// rows that failed normalization and were skipped.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Vec<BookRecord>,
    pub skipped: usize,
}

impl Snapshot {
    /// Bulk-load a snapshot file.
    ///
    /// Malformed lines are skipped with a warning; only failing to read the
    /// file at all is an error. This is the one I/O step of the in-memory
    /// store — everything after load is a pure scan.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).or_raise(|| ErrorKind::Snapshot(path.to_path_buf()))?;
        let snapshot = Self::parse(&contents);
        info!(
            path = %path.display(),
            records = snapshot.records.len(),
            skipped = snapshot.skipped,
            "dataset snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Parse snapshot contents, skipping rows that fail normalization.
    pub fn parse(contents: &str) -> Self {
        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(record) => records.push(record),
                Err(error) => {
                    skipped += 1;
                    warn!(line = index + 1, %error, "skipping malformed snapshot row");
                },
            }
        }
        Self { records, skipped }
    }
}

fn parse_line(line: &str) -> tome_catalog::error::Result<BookRecord> {
    if line.starts_with('{') {
        let raw: RawRecord = serde_json::from_str(line)
            .or_raise(|| tome_catalog::error::ErrorKind::MalformedRecord("invalid JSON row"))?;
        BookRecord::try_from(raw)
    } else {
        BookRecord::from_delimited(line)
    }
}
