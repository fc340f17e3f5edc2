//! Content cleanup applied to every imported text.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
// Keep word characters, whitespace, and the Arabic/Persian block (plus the
// Persian-specific letters that live outside it).
static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s؀-ۿﮊپچگ]").unwrap());

/// Arabic-Indic digits as they come out of OCR'd Persian scans, mapped to
/// their ASCII equivalents.
const DIGIT_FIXES: [(char, char); 10] = [
    ('٠', '0'),
    ('١', '1'),
    ('٢', '2'),
    ('٣', '3'),
    ('٤', '4'),
    ('٥', '5'),
    ('٦', '6'),
    ('٧', '7'),
    ('٨', '8'),
    ('٩', '9'),
];

/// Normalize raw book content before it is stored or split into chapters.
///
/// Collapses whitespace runs to single spaces, strips punctuation and other
/// non-word characters (Persian text is preserved), and maps Arabic-Indic
/// digits to ASCII.
pub fn clean(text: &str) -> String {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let text = STRIP.replace_all(&text, "");
    let mut text = text.into_owned();
    for (from, to) in DIGIT_FIXES {
        if text.contains(from) {
            text = text.replace(from, &to.to_string());
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean("a  b\n\nc\td"), "a b c d");
    }

    #[test]
    fn test_strips_punctuation_keeps_words() {
        assert_eq!(clean("Call me Ishmael."), "Call me Ishmael");
    }

    #[test]
    fn test_keeps_persian_text() {
        assert_eq!(clean("فصل ۱ آغاز"), "فصل ۱ آغاز");
    }

    #[test]
    fn test_maps_arabic_indic_digits() {
        assert_eq!(clean("باب ٣"), "باب 3");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(clean("  padded  "), "padded");
    }
}
