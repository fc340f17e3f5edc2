//! The in-memory book store backing dataset-sourced searches.

use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::stats::DatasetStats;
use rand::seq::index;
use std::path::Path;
use std::sync::OnceLock;
use tome_catalog::{BookRecord, SearchHit, SearchQuery, search};
use tracing::instrument;

/// An immutable, bulk-loaded collection of book records.
///
/// The store is constructed once (from a snapshot file or a prepared record
/// list) and then only read: every search re-scans the full record set, and
/// nothing mutates records in place. Construct it where the service is
/// composed and pass it down — there is deliberately no process-wide
/// singleton, so tests can substitute a fixture store.
#[derive(Debug)]
pub struct DatasetStore {
    records: Vec<BookRecord>,
    stats: OnceLock<DatasetStats>,
}

impl DatasetStore {
    /// Load the store from a snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_records(Snapshot::load(path)?.records))
    }

    /// Build the store from an already-parsed record list (fixtures, tests).
    pub fn from_records(records: Vec<BookRecord>) -> Self {
        Self { records, stats: OnceLock::new() }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run one search pass over the full record set.
    ///
    /// Always a complete scan; `query.limit` bounds only the output.
    #[instrument(skip(self), fields(store_size = self.records.len()))]
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchHit> {
        search(self.records.iter().cloned(), query)
    }

    /// Look a record up by its external identifier.
    pub fn get_by_identifier(&self, identifier: &str) -> Option<&BookRecord> {
        if identifier.is_empty() {
            return None;
        }
        self.records.iter().find(|r| r.identifier == identifier)
    }

    /// Pick up to `limit` distinct random records.
    pub fn random(&self, limit: usize) -> Vec<&BookRecord> {
        let amount = limit.min(self.records.len());
        if amount == 0 {
            return Vec::new();
        }
        index::sample(&mut rand::rng(), self.records.len(), amount)
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Dataset summary statistics, computed on first use and cached for the
    /// lifetime of the store (the record set never changes after load).
    pub fn stats(&self) -> &DatasetStats {
        self.stats.get_or_init(|| DatasetStats::compute(&self.records))
    }
}
