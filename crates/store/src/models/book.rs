use crate::error::{Error, ErrorKind};
use exn::ResultExt;
use time::UtcDateTime;
use tome_catalog::BookRecord;

/// A fully-loaded book: its catalog record plus the imported text.
#[derive(Debug, Clone)]
pub struct StoredBook {
    pub id: i64,
    pub record: BookRecord,
    pub word_count: u64,
    pub text: String,
    pub created_at: UtcDateTime,
}

#[derive(sqlx::FromRow)]
pub(crate) struct BookRow {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: i64,
    pub(crate) page_count: i64,
    pub(crate) identifier: String,
    pub(crate) source_url: String,
    pub(crate) word_count: i64,
    pub(crate) text_content: String,
    pub(crate) created_at: i64,
}

impl TryFrom<BookRow> for StoredBook {
    type Error = Error;
    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            record: BookRecord {
                title: row.title,
                author: row.author,
                year: u32::try_from(row.year).or_raise(|| ErrorKind::InvalidData("year"))?,
                page_count: u32::try_from(row.page_count).or_raise(|| ErrorKind::InvalidData("page count"))?,
                identifier: row.identifier,
                source_url: row.source_url,
            },
            word_count: u64::try_from(row.word_count).or_raise(|| ErrorKind::InvalidData("word count"))?,
            text: row.text_content,
            created_at: UtcDateTime::from_unix_timestamp(row.created_at)
                .or_raise(|| ErrorKind::InvalidData("creation date"))?,
        })
    }
}

/// Metadata-only projection used for search scans. Skips `text_content`,
/// which can be megabytes per row.
#[derive(sqlx::FromRow)]
pub(crate) struct RecordRow {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: i64,
    pub(crate) page_count: i64,
    pub(crate) identifier: String,
    pub(crate) source_url: String,
}

impl TryFrom<RecordRow> for BookRecord {
    type Error = Error;
    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Ok(Self {
            title: row.title,
            author: row.author,
            year: u32::try_from(row.year).or_raise(|| ErrorKind::InvalidData("year"))?,
            page_count: u32::try_from(row.page_count).or_raise(|| ErrorKind::InvalidData("page count"))?,
            identifier: row.identifier,
            source_url: row.source_url,
        })
    }
}
