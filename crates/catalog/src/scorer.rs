//! Relevance scoring for records that passed the matcher.

use crate::models::BookRecord;
use crate::query::NormalizedQuery;

/// Compute the relevance score for one matched record.
///
/// Each supplied filter adds its own contribution; absent filters contribute
/// exactly 0. The year contribution `1 - |diff| / 100` is deliberately left
/// unclamped and can go negative for records a century or more away from the
/// requested year.
pub(crate) fn score(record: &BookRecord, query: &NormalizedQuery) -> f64 {
    let mut score = 0.0;
    if let Some(title) = &query.title {
        score += similarity(title, &record.title.to_lowercase());
    }
    if !query.author_tokens.is_empty() {
        let author_words: Vec<String> = record.author.split_whitespace().map(str::to_lowercase).collect();
        let token_sum: f64 = query
            .author_tokens
            .iter()
            .map(|token| author_words.iter().map(|word| similarity(token, word)).fold(0.0, f64::max))
            .sum();
        score += token_sum / query.author_tokens.len() as f64;
    }
    if let Some(year) = query.year
        && record.has_year()
    {
        score += 1.0 - f64::from(record.year.abs_diff(year)) / 100.0;
    }
    score
}

/// String similarity ratio in `[0, 1]`: 1.0 for identical strings, near 0.0
/// for strings with nothing in common. Inputs are expected lower-cased.
fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchQuery;

    fn record(title: &str, author: &str, year: u32) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            author: author.to_string(),
            year,
            page_count: 0,
            identifier: String::new(),
            source_url: String::new(),
        }
    }

    #[test]
    fn test_similarity_bounds() {
        assert!((similarity("whale", "whale") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("whale", "xyzzy") < 0.3);
        let ratio = similarity("great adventure", "great adventures");
        assert!(ratio > 0.8 && ratio < 1.0);
    }

    #[test]
    fn test_absent_filters_contribute_zero() {
        let query = SearchQuery::default();
        assert_eq!(score(&record("Moby-Dick", "Herman Melville", 1851), &query.normalize()), 0.0);
    }

    #[test]
    fn test_exact_title_scores_one() {
        let query = SearchQuery {
            title: Some("Moby-Dick".to_string()),
            ..SearchQuery::default()
        };
        let s = score(&record("Moby-Dick", "", 0), &query.normalize());
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_author_tokens_average_their_best_word() {
        let query = SearchQuery {
            author: Some("herman melville".to_string()),
            ..SearchQuery::default()
        };
        // Both tokens find an identical author word, so the average is 1.0.
        let s = score(&record("", "Herman Melville", 0), &query.normalize());
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_year_contribution() {
        let normalized = SearchQuery {
            year: Some(1997),
            ..SearchQuery::default()
        }
        .normalize();
        let exact = score(&record("T", "", 1997), &normalized);
        let close = score(&record("T", "", 1998), &normalized);
        assert!((exact - 1.0).abs() < 1e-9);
        assert!((close - 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_year_contribution_goes_negative_far_out() {
        let normalized = SearchQuery {
            year: Some(2020),
            ..SearchQuery::default()
        }
        .normalize();
        // 1800 is 220 years out: 1 - 220/100 = -1.2, preserved unclamped.
        let s = score(&record("T", "", 1800), &normalized);
        assert!((s - (-1.2)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_year_earns_no_year_contribution() {
        let normalized = SearchQuery {
            year: Some(1997),
            ..SearchQuery::default()
        }
        .normalize();
        assert_eq!(score(&record("T", "", 0), &normalized), 0.0);
    }
}
