//! Summary statistics over a loaded dataset.

use std::collections::HashMap;
use tome_catalog::BookRecord;

/// At most this many records are inspected when computing statistics, so
/// that stats stay cheap on multi-hundred-thousand-book snapshots.
const SAMPLE_SIZE: usize = 1000;
const TOP_AUTHORS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeStats {
    pub min: u32,
    pub max: u32,
    pub average: f64,
}

/// Dataset summary: totals, year spread, most frequent authors and page
/// counts, computed over a bounded sample of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStats {
    pub total_books: usize,
    pub sample_size: usize,
    pub years: RangeStats,
    /// Most frequent authors in the sample, descending by count.
    pub top_authors: Vec<(String, usize)>,
    pub page_counts: RangeStats,
}

impl DatasetStats {
    pub fn compute(records: &[BookRecord]) -> Self {
        let sample_size = records.len().min(SAMPLE_SIZE);
        let sample = &records[..sample_size];

        let years: Vec<u32> = sample.iter().filter(|r| r.has_year()).map(|r| r.year).collect();
        let pages: Vec<u32> = sample.iter().filter(|r| r.page_count > 0).map(|r| r.page_count).collect();

        let mut author_counts: HashMap<&str, usize> = HashMap::new();
        for record in sample.iter().filter(|r| !r.author.is_empty()) {
            *author_counts.entry(record.author.as_str()).or_insert(0) += 1;
        }
        let mut top_authors: Vec<(String, usize)> =
            author_counts.into_iter().map(|(author, count)| (author.to_string(), count)).collect();
        // Descending by count, alphabetical among equals so the output is
        // reproducible run to run.
        top_authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_authors.truncate(TOP_AUTHORS);

        Self {
            total_books: records.len(),
            sample_size,
            years: range_stats(&years),
            top_authors,
            page_counts: range_stats(&pages),
        }
    }
}

fn range_stats(values: &[u32]) -> RangeStats {
    if values.is_empty() {
        return RangeStats::default();
    }
    RangeStats {
        min: values.iter().copied().min().unwrap_or(0),
        max: values.iter().copied().max().unwrap_or(0),
        average: values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64,
    }
}
