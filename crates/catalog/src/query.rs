//! Search query parameters and normalization.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Default number of results returned when the caller doesn't say otherwise.
pub const DEFAULT_LIMIT: usize = 10;

/// How matched records are ordered before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Descending by relevance score.
    #[default]
    Relevance,
    /// Descending by year, ties broken by descending relevance score.
    Year,
    /// Ascending by case-insensitive title, ties broken by ascending
    /// relevance score.
    Title,
}

impl FromStr for SortBy {
    type Err = UnknownSortBy;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "year" => Ok(Self::Year),
            "title" => Ok(Self::Title),
            other => Err(UnknownSortBy(other.to_string())),
        }
    }
}
impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Relevance => "relevance",
            Self::Year => "year",
            Self::Title => "title",
        })
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown sort mode: {_0} (expected relevance, year or title)")]
pub struct UnknownSortBy(#[error(not(source))] String);

/// Parameters for one search pass over a store.
///
/// A `None` filter is skipped entirely: it neither excludes records nor
/// contributes to the relevance score. Validation of ranges (`limit` within
/// `[1, 100]`, `year` within `[1800, 2024]`, `min_year <= max_year`) is the
/// caller's responsibility before this type reaches the pipeline.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<u32>,
    pub min_year: Option<u32>,
    pub max_year: Option<u32>,
    pub limit: usize,
    pub sort_by: SortBy,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            year: None,
            min_year: None,
            max_year: None,
            limit: DEFAULT_LIMIT,
            sort_by: SortBy::default(),
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the normalized term set for matching and scoring.
    ///
    /// Pure function of the query: lower-cases the title, lower-cases and
    /// whitespace-splits the author into tokens, and passes the numeric
    /// filters through unchanged. No diacritic folding, no stemming.
    pub(crate) fn normalize(&self) -> NormalizedQuery {
        NormalizedQuery {
            title: self
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase),
            author_tokens: self
                .author
                .as_deref()
                .map(|a| a.split_whitespace().map(|t| t.trim().to_lowercase()).collect())
                .unwrap_or_default(),
            year: self.year,
            min_year: self.min_year,
            max_year: self.max_year,
        }
    }
}

/// Lower-cased, tokenized view of a [`SearchQuery`], computed once per pass.
pub(crate) struct NormalizedQuery {
    pub(crate) title: Option<String>,
    pub(crate) author_tokens: Vec<String>,
    pub(crate) year: Option<u32>,
    pub(crate) min_year: Option<u32>,
    pub(crate) max_year: Option<u32>,
}
