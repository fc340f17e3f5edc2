mod book;
mod bookmark;
mod chapter;

pub use crate::models::book::StoredBook;
pub(crate) use crate::models::book::{BookRow, RecordRow};
pub use crate::models::bookmark::Bookmark;
pub(crate) use crate::models::bookmark::BookmarkRow;
pub use crate::models::chapter::Chapter;
pub(crate) use crate::models::chapter::ChapterRow;
