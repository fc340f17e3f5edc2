use crate::error::{Error, ErrorKind};
use exn::ResultExt;
use time::UtcDateTime;

/// A saved reading position within a book's paginated text.
#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: i64,
    pub book_id: i64,
    pub page_number: u32,
    pub note: Option<String>,
    pub created_at: UtcDateTime,
}

#[derive(sqlx::FromRow)]
pub(crate) struct BookmarkRow {
    pub(crate) id: i64,
    pub(crate) book_id: i64,
    pub(crate) page_number: i64,
    #[sqlx(default)]
    pub(crate) note: Option<String>,
    pub(crate) created_at: i64,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = Error;
    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            book_id: row.book_id,
            page_number: u32::try_from(row.page_number).or_raise(|| ErrorKind::InvalidData("page number"))?,
            note: row.note,
            created_at: UtcDateTime::from_unix_timestamp(row.created_at)
                .or_raise(|| ErrorKind::InvalidData("creation date"))?,
        })
    }
}
