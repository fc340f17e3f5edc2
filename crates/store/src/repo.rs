//! Repository for books, chapters, and bookmarks.
//!
//! Chapters are derived from the book text at insert time and stored
//! alongside it, so they never drift from the text they were split from.
//! Bookmarks hang off the book row and cascade away with it.

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::{Bookmark, BookmarkRow, BookRow, Chapter, ChapterRow, RecordRow, StoredBook};
use exn::ResultExt;
use sqlx::SqlitePool;
use time::UtcDateTime;
use tome_catalog::{BookRecord, SearchHit, SearchQuery};
use tracing::{debug, warn};

/// Repository for managing imported books in the library database.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Insert a book and its chapter split in one transaction.
    ///
    /// The text should already be cleaned; it is split into chapters here so
    /// the stored split always corresponds to the stored text. Returns the
    /// new book's row id.
    pub async fn add_book(&self, record: &BookRecord, text: &str) -> Result<i64> {
        let word_count = i64::try_from(text.split_whitespace().count())
            .or_raise(|| ErrorKind::InvalidData("word count"))?;
        let chapters = tome_text::split_chapters(text);
        let mut tx = self.pool.begin().await.or_raise(|| ErrorKind::Database)?;
        let book_id = sqlx::query(include_str!("../queries/insert_book.sql"))
            .bind(&record.title)
            .bind(&record.author)
            .bind(i64::from(record.year))
            .bind(i64::from(record.page_count))
            .bind(&record.identifier)
            .bind(&record.source_url)
            .bind(word_count)
            .bind(text)
            .bind(UtcDateTime::now().unix_timestamp())
            .execute(&mut *tx)
            .await
            .or_raise(|| ErrorKind::Database)?
            .last_insert_rowid();
        for (index, content) in chapters.iter().enumerate() {
            let number = i64::try_from(index + 1).or_raise(|| ErrorKind::InvalidData("chapter number"))?;
            sqlx::query(include_str!("../queries/insert_chapter.sql"))
                .bind(book_id)
                .bind(number)
                .bind(content)
                .execute(&mut *tx)
                .await
                .or_raise(|| ErrorKind::Database)?;
        }
        tx.commit().await.or_raise(|| ErrorKind::Database)?;
        debug!(book_id, chapters = chapters.len(), "stored book");
        Ok(book_id)
    }

    // =========================================================================
    // Get/Fetch
    // =========================================================================

    /// Get a book with its full text by row id.
    pub async fn get_book(&self, id: i64) -> Result<StoredBook> {
        let row: Option<BookRow> = sqlx::query_as(include_str!("../queries/get_book.sql"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        match row {
            Some(row) => row.try_into(),
            None => exn::bail!(ErrorKind::BookNotFound(id)),
        }
    }

    /// Get one chapter of a book by its 1-based chapter number.
    pub async fn get_chapter(&self, book_id: i64, number: u32) -> Result<Chapter> {
        let row: Option<ChapterRow> = sqlx::query_as(include_str!("../queries/get_chapter.sql"))
            .bind(book_id)
            .bind(i64::from(number))
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        match row {
            Some(row) => row.try_into(),
            None => exn::bail!(ErrorKind::ChapterNotFound(book_id, number)),
        }
    }

    /// Count a book's chapters.
    pub async fn chapter_count(&self, book_id: i64) -> Result<u32> {
        let count: i64 = sqlx::query_scalar(include_str!("../queries/count_chapters.sql"))
            .bind(book_id)
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        u32::try_from(count).or_raise(|| ErrorKind::InvalidData("chapter count"))
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// List every book's catalog record, in insertion order.
    ///
    /// Rows that fail conversion are skipped with a warning rather than
    /// failing the whole listing; one corrupt row shouldn't take search down.
    pub async fn all_records(&self) -> Result<Vec<(i64, BookRecord)>> {
        let rows: Vec<RecordRow> = sqlx::query_as(include_str!("../queries/list_records.sql"))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id;
            match BookRecord::try_from(row) {
                Ok(record) => records.push((id, record)),
                Err(error) => warn!(book_id = id, %error, "skipping unreadable book row"),
            }
        }
        Ok(records)
    }

    /// Search the library with the shared matching and ranking pipeline.
    ///
    /// All records are fetched and filtered in memory, the same pass the
    /// dataset store runs, so both sources order results identically.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        let records = self.all_records().await?.into_iter().map(|(_, record)| record);
        Ok(tome_catalog::search(records, query))
    }

    /// Count the books in the library.
    pub async fn count_books(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(include_str!("../queries/count_books.sql"))
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        u64::try_from(count).or_raise(|| ErrorKind::InvalidData("book count"))
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    /// Save a reading position. Re-bookmarking the same page updates the note.
    pub async fn add_bookmark(&self, book_id: i64, page_number: u32, note: Option<&str>) -> Result<()> {
        // Surface a missing book as BookNotFound instead of a bare foreign
        // key violation.
        self.get_book_exists(book_id).await?;
        sqlx::query(include_str!("../queries/insert_bookmark.sql"))
            .bind(book_id)
            .bind(i64::from(page_number))
            .bind(note)
            .bind(UtcDateTime::now().unix_timestamp())
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }

    /// List a book's bookmarks in page order.
    pub async fn list_bookmarks(&self, book_id: i64) -> Result<Vec<Bookmark>> {
        let rows: Vec<BookmarkRow> = sqlx::query_as(include_str!("../queries/list_bookmarks.sql"))
            .bind(book_id)
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(|row| row.try_into()).collect()
    }

    async fn get_book_exists(&self, book_id: i64) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE id = ?")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        if count == 0 {
            exn::bail!(ErrorKind::BookNotFound(book_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tome_catalog::SortBy;

    fn record(title: &str, author: &str, year: u32) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            author: author.to_string(),
            year,
            page_count: 100,
            identifier: String::new(),
            source_url: String::new(),
        }
    }

    async fn repo() -> (Database, Repository) {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::from(&db);
        (db, repo)
    }

    #[tokio::test]
    async fn test_add_and_get_book() {
        let (db, repo) = repo().await;
        let id = repo
            .add_book(&record("Moby Dick", "Herman Melville", 1851), "Call me Ishmael. Some years ago.")
            .await
            .unwrap();
        let book = repo.get_book(id).await.unwrap();
        assert_eq!(book.record.title, "Moby Dick");
        assert_eq!(book.word_count, 6);
        assert!(book.text.starts_with("Call me Ishmael"));
        db.close().await;
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let (db, repo) = repo().await;
        let error = repo.get_book(99).await.unwrap_err();
        assert!(matches!(&*error, ErrorKind::BookNotFound(99)));
        db.close().await;
    }

    #[tokio::test]
    async fn test_chapters_are_split_on_insert() {
        let (db, repo) = repo().await;
        let text = "Chapter 1\nLoomings.\nChapter 2\nThe Carpet-Bag.";
        let id = repo.add_book(&record("Moby Dick", "Herman Melville", 1851), text).await.unwrap();
        assert_eq!(repo.chapter_count(id).await.unwrap(), 2);
        let second = repo.get_chapter(id, 2).await.unwrap();
        assert!(second.content.contains("Carpet-Bag"));
        db.close().await;
    }

    #[tokio::test]
    async fn test_get_missing_chapter() {
        let (db, repo) = repo().await;
        let id = repo.add_book(&record("Moby Dick", "Herman Melville", 1851), "No headings here.").await.unwrap();
        let error = repo.get_chapter(id, 5).await.unwrap_err();
        assert!(matches!(&*error, ErrorKind::ChapterNotFound(_, 5)));
        db.close().await;
    }

    #[tokio::test]
    async fn test_search_ranks_like_the_catalog() {
        let (db, repo) = repo().await;
        repo.add_book(&record("Dune", "Frank Herbert", 1965), "Arrakis.").await.unwrap();
        repo.add_book(&record("Dune Messiah", "Frank Herbert", 1969), "Paul.").await.unwrap();
        let query = SearchQuery {
            title: Some("Dune".to_string()),
            sort_by: SortBy::Year,
            ..SearchQuery::default()
        };
        let hits = repo.search(&query).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record.year, 1969);
        db.close().await;
    }

    #[tokio::test]
    async fn test_bookmarks_round_trip() {
        let (db, repo) = repo().await;
        let id = repo.add_book(&record("Dune", "Frank Herbert", 1965), "Arrakis.").await.unwrap();
        repo.add_bookmark(id, 12, Some("the spice")).await.unwrap();
        repo.add_bookmark(id, 3, None).await.unwrap();
        let marks = repo.list_bookmarks(id).await.unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].page_number, 3);
        assert_eq!(marks[1].note.as_deref(), Some("the spice"));
        db.close().await;
    }

    #[tokio::test]
    async fn test_bookmark_same_page_updates_note() {
        let (db, repo) = repo().await;
        let id = repo.add_book(&record("Dune", "Frank Herbert", 1965), "Arrakis.").await.unwrap();
        repo.add_bookmark(id, 12, Some("first")).await.unwrap();
        repo.add_bookmark(id, 12, Some("second")).await.unwrap();
        let marks = repo.list_bookmarks(id).await.unwrap();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].note.as_deref(), Some("second"));
        db.close().await;
    }

    #[tokio::test]
    async fn test_bookmark_missing_book() {
        let (db, repo) = repo().await;
        let error = repo.add_bookmark(42, 1, None).await.unwrap_err();
        assert!(matches!(&*error, ErrorKind::BookNotFound(42)));
        db.close().await;
    }

    #[tokio::test]
    async fn test_count_books() {
        let (db, repo) = repo().await;
        assert_eq!(repo.count_books().await.unwrap(), 0);
        repo.add_book(&record("Dune", "Frank Herbert", 1965), "Arrakis.").await.unwrap();
        assert_eq!(repo.count_books().await.unwrap(), 1);
        db.close().await;
    }
}
