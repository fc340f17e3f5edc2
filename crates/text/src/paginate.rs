//! Fixed-size pagination of book content for the reader.

/// Characters per reader page.
pub const PAGE_SIZE: usize = 1000;

/// One reader page of a book's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-indexed page number.
    pub number: usize,
    /// Character offset of the page start within the content.
    pub offset: usize,
    pub content: String,
}

/// Split content into consecutive [`PAGE_SIZE`]-character pages.
///
/// Boundaries are character counts, not bytes, so multi-byte text paginates
/// the same way its reader counts it. Empty content has no pages.
pub fn pages(content: &str) -> Vec<Page> {
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(PAGE_SIZE)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i + 1,
            offset: i * PAGE_SIZE,
            content: chunk.iter().collect(),
        })
        .collect()
}

/// Number of pages the content paginates into.
pub fn page_count(content: &str) -> usize {
    content.chars().count().div_ceil(PAGE_SIZE)
}

/// Fetch a single 1-indexed page, or `None` when the number is out of range.
pub fn page(content: &str, number: usize) -> Option<Page> {
    if number == 0 {
        return None;
    }
    let offset = (number - 1) * PAGE_SIZE;
    let chunk: String = content.chars().skip(offset).take(PAGE_SIZE).collect();
    if chunk.is_empty() {
        return None;
    }
    Some(Page { number, offset, content: chunk })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_content_has_no_pages() {
        assert!(pages("").is_empty());
        assert_eq!(page_count(""), 0);
        assert!(page("", 1).is_none());
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let content = "x".repeat(PAGE_SIZE * 2);
        assert_eq!(page_count(&content), 2);
        let all = pages(&content);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].number, 2);
        assert_eq!(all[1].offset, PAGE_SIZE);
    }

    #[test]
    fn test_trailing_partial_page() {
        let content = "x".repeat(PAGE_SIZE + 7);
        assert_eq!(page_count(&content), 2);
        assert_eq!(page(&content, 2).unwrap().content.len(), 7);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn test_out_of_range_page(#[case] number: usize) {
        let content = "x".repeat(PAGE_SIZE + 1);
        assert!(page(&content, number).is_none());
    }

    #[test]
    fn test_page_matches_pages_listing() {
        let content: String = ('a'..='z').cycle().take(PAGE_SIZE * 2 + 100).collect();
        let listing = pages(&content);
        for expected in &listing {
            assert_eq!(page(&content, expected.number).as_ref(), Some(expected));
        }
    }

    #[test]
    fn test_multibyte_content_counts_characters() {
        let content = "ک".repeat(PAGE_SIZE + 1);
        assert_eq!(page_count(&content), 2);
        assert_eq!(page(&content, 2).unwrap().content.chars().count(), 1);
    }
}
