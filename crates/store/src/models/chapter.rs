use crate::error::{Error, ErrorKind};
use exn::ResultExt;

/// One chapter of an imported book, numbered from 1 in reading order.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub book_id: i64,
    pub number: u32,
    pub content: String,
}

#[derive(sqlx::FromRow)]
pub(crate) struct ChapterRow {
    pub(crate) book_id: i64,
    pub(crate) chapter_number: i64,
    pub(crate) content: String,
}

impl TryFrom<ChapterRow> for Chapter {
    type Error = Error;
    fn try_from(row: ChapterRow) -> Result<Self, Self::Error> {
        Ok(Self {
            book_id: row.book_id,
            number: u32::try_from(row.chapter_number).or_raise(|| ErrorKind::InvalidData("chapter number"))?,
            content: row.content,
        })
    }
}
