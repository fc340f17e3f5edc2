//! Ordering and truncation of scored results.

use crate::query::SortBy;
use crate::search::SearchHit;

/// Sort hits according to the requested mode and keep the first `limit`.
///
/// All three modes rely on the sort being stable, so that ties beyond the
/// documented tie-break key resolve in original store order.
pub(crate) fn rank(mut hits: Vec<SearchHit>, sort_by: SortBy, limit: usize) -> Vec<SearchHit> {
    match sort_by {
        SortBy::Relevance => {
            hits.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        },
        SortBy::Year => {
            hits.sort_by(|a, b| {
                b.record
                    .year
                    .cmp(&a.record.year)
                    .then_with(|| b.relevance_score.total_cmp(&a.relevance_score))
            });
        },
        SortBy::Title => {
            hits.sort_by(|a, b| {
                title_key(a)
                    .cmp(&title_key(b))
                    .then_with(|| a.relevance_score.total_cmp(&b.relevance_score))
            });
        },
    }
    hits.truncate(limit);
    hits
}

fn title_key(hit: &SearchHit) -> String {
    hit.record.title.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookRecord;

    fn hit(title: &str, year: u32, score: f64) -> SearchHit {
        SearchHit {
            record: BookRecord {
                title: title.to_string(),
                author: String::new(),
                year,
                page_count: 0,
                identifier: String::new(),
                source_url: String::new(),
            },
            relevance_score: score,
        }
    }

    #[test]
    fn test_relevance_descending() {
        let ranked = rank(vec![hit("A", 0, 0.2), hit("B", 0, 0.9), hit("C", 0, 0.5)], SortBy::Relevance, 10);
        let titles: Vec<&str> = ranked.iter().map(|h| h.record.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_year_descending_with_score_tiebreak() {
        let ranked = rank(
            vec![hit("Old", 2010, 0.9), hit("New", 2020, 0.1), hit("NewHot", 2020, 0.8)],
            SortBy::Year,
            10,
        );
        let titles: Vec<&str> = ranked.iter().map(|h| h.record.title.as_str()).collect();
        assert_eq!(titles, vec!["NewHot", "New", "Old"]);
    }

    #[test]
    fn test_title_ascending_regardless_of_score() {
        let ranked = rank(vec![hit("banana", 0, 0.9), hit("Apple", 0, 0.1)], SortBy::Title, 10);
        let titles: Vec<&str> = ranked.iter().map(|h| h.record.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana"]);
    }

    #[test]
    fn test_title_ties_break_by_ascending_score() {
        let ranked = rank(vec![hit("Same", 0, 0.9), hit("same", 0, 0.1)], SortBy::Title, 10);
        assert!((ranked[0].relevance_score - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stable_order_for_equal_keys() {
        // Equal score: original store order is the final tie-break.
        let ranked = rank(vec![hit("First", 0, 0.5), hit("Second", 0, 0.5)], SortBy::Relevance, 10);
        assert_eq!(ranked[0].record.title, "First");
    }

    #[test]
    fn test_truncation() {
        let hits = (0..5).map(|i| hit(&format!("T{i}"), 0, f64::from(i))).collect();
        let ranked = rank(hits, SortBy::Relevance, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.title, "T4");
    }
}
