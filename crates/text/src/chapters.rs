//! Chapter detection for imported book content.

use regex::Regex;
use std::sync::LazyLock;

// Common chapter heading patterns in English and Persian, plus numbered,
// Roman-numeral and letter sections.
static HEADINGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)فصل\s+\d+|Chapter\s+\d+|بخش\s+\d+|باب\s+\d+|قسمت\s+\d+|^\d+\.|^\d+\)|^[IVX]+\.|^[A-Z]\.",
    )
    .unwrap()
});

/// Split book content into chapters at recognized heading patterns.
///
/// Each chapter starts at a heading and runs to the next one. Content before
/// the first heading becomes its own leading chapter; text with no headings
/// at all yields a single chapter. Empty input yields no chapters.
pub fn split_chapters(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let starts: Vec<usize> = HEADINGS.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![text.trim().to_string()];
    }
    let mut chapters = Vec::with_capacity(starts.len() + 1);
    let preamble = text[..starts[0]].trim();
    if !preamble.is_empty() {
        chapters.push(preamble.to_string());
    }
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let chapter = text[start..end].trim();
        if !chapter.is_empty() {
            chapters.push(chapter.to_string());
        }
    }
    chapters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_english_headings() {
        let text = "Chapter 1 It begins.\nChapter 2 It continues.";
        let chapters = split_chapters(text);
        assert_eq!(chapters.len(), 2);
        assert!(chapters[0].starts_with("Chapter 1"));
        assert!(chapters[1].starts_with("Chapter 2"));
    }

    #[test]
    fn test_splits_on_persian_headings() {
        let chapters = split_chapters("فصل 1 شروع داستان فصل 2 ادامه داستان");
        assert_eq!(chapters.len(), 2);
    }

    #[test]
    fn test_preamble_becomes_leading_chapter() {
        let chapters = split_chapters("A short preface.\nChapter 1 The story.");
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0], "A short preface.");
    }

    #[test]
    fn test_no_headings_yields_single_chapter() {
        let chapters = split_chapters("Just one continuous text.");
        assert_eq!(chapters, vec!["Just one continuous text.".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(split_chapters("   ").is_empty());
    }

    #[test]
    fn test_numbered_sections_at_line_start() {
        let chapters = split_chapters("1. First part\n2. Second part");
        assert_eq!(chapters.len(), 2);
    }
}
