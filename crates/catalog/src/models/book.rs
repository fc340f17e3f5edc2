use crate::error::{ErrorKind, Result};
use crate::models::RawRecord;
use std::str::FromStr;

/// One catalogued book.
///
/// `year = 0` means "no year known": such records are excluded from
/// year-based filtering and boosting, and are never matched against an
/// explicit year filter by equality or proximity.
///
/// Records are immutable during a single search pass; the relevance score
/// computed per query lives on [`SearchHit`](crate::SearchHit), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Book title (required, non-unique)
    pub title: String,
    /// Author name (empty = unknown)
    pub author: String,
    /// Publication year, 0 = unknown
    pub year: u32,
    /// Number of pages, 0 = unknown
    pub page_count: u32,
    /// External ID (e.g. archive identifier); unique when present
    pub identifier: String,
    /// URL to the full text, if any
    pub source_url: String,
}

impl BookRecord {
    /// Parse a single pipe-delimited snapshot line:
    /// `title|author|year|page_count|identifier|source_url`.
    ///
    /// A non-numeric year or page count degrades to 0 (unknown) rather than
    /// failing the whole line; only a structurally short line is an error.
    pub fn from_delimited(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 6 {
            exn::bail!(ErrorKind::MalformedRecord("expected 6 pipe-delimited fields"));
        }
        Ok(Self {
            title: parts[0].trim().to_string(),
            author: parts[1].trim().to_string(),
            year: parse_or_zero(parts[2]),
            page_count: parse_or_zero(parts[3]),
            identifier: parts[4].trim().to_string(),
            source_url: parts[5].trim().to_string(),
        })
    }

    /// Whether this record carries a usable publication year.
    pub fn has_year(&self) -> bool {
        self.year > 0
    }
}

fn parse_or_zero(field: &str) -> u32 {
    u32::from_str(field.trim()).unwrap_or(0)
}

impl TryFrom<RawRecord> for BookRecord {
    type Error = crate::error::Error;

    /// Normalize a loosely-typed mapping into a [`BookRecord`].
    ///
    /// A record without a title is considered malformed; everything else
    /// degrades to its "unknown" value.
    fn try_from(raw: RawRecord) -> Result<Self> {
        let title = raw.title.unwrap_or_default();
        if title.trim().is_empty() {
            exn::bail!(ErrorKind::MalformedRecord("missing title"));
        }
        Ok(Self {
            title: title.trim().to_string(),
            author: raw.author.unwrap_or_default().trim().to_string(),
            year: raw.year.unwrap_or(0),
            page_count: raw.page_count.unwrap_or(0),
            identifier: raw.identifier.unwrap_or_default().trim().to_string(),
            source_url: raw.source_url.unwrap_or_default().trim().to_string(),
        })
    }
}
