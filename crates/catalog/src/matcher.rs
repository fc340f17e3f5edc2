//! Per-record inclusion predicate.
//!
//! All active filters must pass (logical AND); an absent filter is skipped.
//! Records failing any filter are excluded from scoring and output entirely.

use crate::models::BookRecord;
use crate::query::NormalizedQuery;

/// Decide whether `record` satisfies every active filter of the query.
pub(crate) fn matches(record: &BookRecord, query: &NormalizedQuery) -> bool {
    if let Some(title) = &query.title
        && !title_matches(title, &record.title)
    {
        return false;
    }
    if !query.author_tokens.is_empty() && !author_matches(&query.author_tokens, &record.author) {
        return false;
    }
    // Year filters only constrain records whose year is known; a record with
    // an unknown year (0) always passes them.
    if record.has_year() {
        if let Some(year) = query.year
            && record.year.abs_diff(year) > 1
        {
            return false;
        }
        if let Some(min_year) = query.min_year
            && record.year < min_year
        {
            return false;
        }
        if let Some(max_year) = query.max_year
            && record.year > max_year
        {
            return false;
        }
    }
    true
}

/// Word-granularity title containment: the (lower-cased) query string must be
/// a substring of at least one whitespace-delimited word of the record title.
///
/// A multi-word query can therefore only match when one title word contains
/// the entire query string; "harry potter" never matches a title where the
/// words are separated.
fn title_matches(query_title: &str, record_title: &str) -> bool {
    record_title.split_whitespace().any(|word| word.to_lowercase().contains(query_title))
}

/// Permissive author matching: OR across query tokens. A token matches when
/// it equals, is contained in, or contains any lower-cased word of the
/// record's author.
fn author_matches(tokens: &[String], record_author: &str) -> bool {
    let author_words: Vec<String> = record_author.split_whitespace().map(str::to_lowercase).collect();
    tokens.iter().any(|token| {
        author_words.iter().any(|word| word == token || word.contains(token.as_str()) || token.contains(word.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchQuery;
    use rstest::rstest;

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

    #[rstest]
    #[case("harry", "Harry Potter and the Stone", true)]
    #[case("pott", "Harry Potter and the Stone", true)]
    #[case("harry potter", "Harry Potter and the Stone", false)] // spans two words
    #[case("stone", "Harry Potter and the Stone", true)]
    #[case("xyzzy", "Harry Potter and the Stone", false)]
    fn test_title_word_granularity(#[case] query: &str, #[case] title: &str, #[case] expected: bool) {
        assert_eq!(title_matches(query, title), expected);
    }

    #[rstest]
    #[case(&["rowling"], "J.K. Rowling", true)] // exact word
    #[case(&["rowl"], "J.K. Rowling", true)] // token inside word
    #[case(&["rowlings"], "J.K. Rowling", true)] // word inside token
    #[case(&["tolkien", "rowling"], "J.K. Rowling", true)] // OR across tokens
    #[case(&["tolkien"], "J.K. Rowling", false)]
    fn test_author_token_overlap(#[case] tokens: &[&str], #[case] author: &str, #[case] expected: bool) {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(author_matches(&tokens, author), expected);
    }

    #[test]
    fn test_unknown_year_passes_year_filter() {
        let query = SearchQuery {
            year: Some(1997),
            ..SearchQuery::default()
        };
        assert!(matches(&record("Anything", "", 0), &query.normalize()));
    }

    #[rstest]
    #[case(1997, true)] // exact
    #[case(1998, true)] // within one-year tolerance
    #[case(1996, true)]
    #[case(1999, false)]
    #[case(1800, false)]
    fn test_year_tolerance(#[case] record_year: u32, #[case] expected: bool) {
        let query = SearchQuery {
            year: Some(1997),
            ..SearchQuery::default()
        };
        assert_eq!(matches(&record("T", "", record_year), &query.normalize()), expected);
    }

    #[test]
    fn test_year_range_excludes_known_years_only() {
        let query = SearchQuery {
            min_year: Some(1900),
            max_year: Some(1950),
            ..SearchQuery::default()
        };
        let normalized = query.normalize();
        assert!(matches(&record("T", "", 1920), &normalized));
        assert!(!matches(&record("T", "", 1890), &normalized));
        assert!(!matches(&record("T", "", 1960), &normalized));
        assert!(matches(&record("T", "", 0), &normalized));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let query = SearchQuery {
            title: Some("harry".to_string()),
            author: Some("tolkien".to_string()),
            ..SearchQuery::default()
        };
        // Title matches but author doesn't: excluded.
        assert!(!matches(&record("Harry Potter", "J.K. Rowling", 1997), &query.normalize()));
    }
}
