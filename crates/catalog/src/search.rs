//! The search pipeline: normalize, scan, match, score, rank, truncate.

use crate::matcher;
use crate::models::BookRecord;
use crate::query::SearchQuery;
use crate::rank;
use crate::scorer;
use tracing::debug;

/// One search result: a record plus the relevance score computed for this
/// query. Scores are transient; they are recomputed from scratch on every
/// pass and never carried over between queries.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub record: BookRecord,
    pub relevance_score: f64,
}

/// Run one synchronous search pass over the full record set.
///
/// Every record is visited exactly once regardless of `limit`; the limit
/// bounds the output, not the scan. The store must stay read-only for the
/// duration of the pass, which this signature enforces by consuming an
/// owned snapshot of the records.
///
/// Supplying a store's records is the caller's job; a store-level failure to
/// produce them is reported by the caller's own result type, never from
/// here. Records that failed normalization should already have been skipped
/// at the store boundary.
pub fn search(records: impl IntoIterator<Item = BookRecord>, query: &SearchQuery) -> Vec<SearchHit> {
    let normalized = query.normalize();
    let mut hits = Vec::new();
    let mut scanned = 0usize;
    for record in records {
        scanned += 1;
        if matcher::matches(&record, &normalized) {
            let relevance_score = scorer::score(&record, &normalized);
            hits.push(SearchHit { record, relevance_score });
        }
    }
    debug!(scanned, matched = hits.len(), "search pass complete");
    rank::rank(hits, query.sort_by, query.limit)
}
