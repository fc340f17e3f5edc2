//! Quick metadata preview of a text before it is imported.

const PREVIEW_LINES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// First few lines of the text, joined back together.
    pub text: String,
    /// Whitespace-delimited word count of the whole text.
    pub word_count: usize,
}

/// Summarize a text for the import picker: a short head excerpt plus the
/// total word count.
pub fn preview(content: &str) -> Preview {
    Preview {
        text: content.lines().take(PREVIEW_LINES).collect::<Vec<_>>().join("\n"),
        word_count: content.split_whitespace().count(),
    }
}
