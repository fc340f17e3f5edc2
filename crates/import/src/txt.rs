use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::path::Path;
use tome_catalog::BookRecord;
use tome_store::Repository;
use tracing::info;

/// Caller-supplied metadata that takes precedence over anything derived
/// from the source file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<u32>,
}

/// What an import produced, for display to the user.
#[derive(Debug)]
pub struct ImportReport {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub word_count: u64,
    pub chapter_count: u32,
    pub page_count: u32,
}

/// Import a plain-text file into the library.
///
/// The file stem stands in for a missing title override; everything else
/// follows [`import_text`].
pub async fn import_txt(repo: &Repository, path: impl AsRef<Path>, overrides: &Overrides) -> Result<ImportReport> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).or_raise(|| ErrorKind::SourceFile(path.to_path_buf()))?;
    let fallback_title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " ").trim().to_string())
        .filter(|stem| !stem.is_empty());
    import_text(repo, &raw, fallback_title.as_deref(), overrides).await
}

/// Import already-extracted text into the library.
///
/// The text is normalized line by line (stray punctuation stripped, digit
/// variants folded to ASCII) while keeping line breaks, so chapter headings
/// that anchor to the start of a line still split correctly.
pub async fn import_text(
    repo: &Repository,
    raw: &str,
    fallback_title: Option<&str>,
    overrides: &Overrides,
) -> Result<ImportReport> {
    let text = normalize(raw);
    if text.is_empty() {
        exn::bail!(ErrorKind::EmptySource);
    }
    let word_count = text.split_whitespace().count() as u64;
    let page_count = tome_text::page_count(&text);
    let record = BookRecord {
        title: overrides
            .title
            .clone()
            .or_else(|| fallback_title.map(str::to_string))
            .unwrap_or_else(|| "Untitled".to_string()),
        author: overrides.author.clone().unwrap_or_else(|| "Unknown Author".to_string()),
        year: overrides.year.unwrap_or(0),
        page_count: u32::try_from(page_count).unwrap_or(u32::MAX),
        identifier: String::new(),
        source_url: String::new(),
    };
    let book_id = repo.add_book(&record, &text).await.or_raise(|| ErrorKind::Store)?;
    let chapter_count = repo.chapter_count(book_id).await.or_raise(|| ErrorKind::Store)?;
    info!(book_id, title = %record.title, word_count, chapter_count, "imported book");
    Ok(ImportReport {
        book_id,
        title: record.title,
        author: record.author,
        word_count,
        chapter_count,
        page_count: u32::try_from(page_count).unwrap_or(u32::MAX),
    })
}

/// Clean each line on its own so the line structure survives.
fn normalize(raw: &str) -> String {
    let lines: Vec<String> = raw.lines().map(tome_text::clean).collect();
    lines.join("\n").trim().to_string()
}
