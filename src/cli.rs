//! Command-line surface of the `tome` binary.
//!
//! Argument validation happens here, at the outermost boundary: by the time
//! a [`SearchQuery`] is handed to a store, its ranges have already been
//! checked, so the pipeline itself never re-validates.

use crate::error::{ErrorKind, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tome_catalog::{SearchQuery, SortBy};
use tome_config::Config;

/// Publication years accepted by the year filters. The dataset predates
/// print, but anything outside this window is a typo more often than not.
const MIN_YEAR: u32 = 1800;
const MAX_YEAR: u32 = 2024;

#[derive(Debug, Parser)]
#[command(name = "tome", version, about = "Bookstore catalogue search and reader backend")]
pub struct Cli {
    /// Use an explicit configuration file instead of the default location.
    #[arg(long, global = true, env = "TOME_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the catalogue by title, author, and year.
    Search(SearchArgs),
    /// Pick random books from the dataset snapshot.
    Random(RandomArgs),
    /// Summarize the dataset snapshot.
    Stats,
    /// Show one record from the chosen source.
    Show(ShowArgs),
    /// Import a plain-text book into the library.
    Import(ImportArgs),
    /// Print one page of an imported book.
    Page(PageArgs),
    /// Print one chapter of an imported book.
    Chapter(ChapterArgs),
    /// Manage reading bookmarks.
    #[command(subcommand)]
    Bookmark(BookmarkCommand),
}

/// Which store a read-side command runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Source {
    /// The bulk dataset snapshot.
    #[default]
    Dataset,
    /// The local library of imported books.
    Library,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Title words to match.
    #[arg(short, long)]
    pub title: Option<String>,
    /// Author name, matched token by token.
    #[arg(short, long)]
    pub author: Option<String>,
    /// Publication year (matches within one year either side).
    #[arg(short, long)]
    pub year: Option<u32>,
    /// Earliest publication year to include.
    #[arg(long)]
    pub min_year: Option<u32>,
    /// Latest publication year to include.
    #[arg(long)]
    pub max_year: Option<u32>,
    /// Maximum number of results.
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Result order: relevance, year, or title.
    #[arg(short, long, default_value_t = SortBy::Relevance)]
    pub sort: SortBy,
    #[arg(long, value_enum, default_value = "dataset")]
    pub source: Source,
}

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// How many books to pick.
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Dataset identifier, or library book id when `--source library`.
    pub id: String,
    #[arg(long, value_enum, default_value = "dataset")]
    pub source: Source,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the `.txt` file to import.
    pub path: PathBuf,
    /// Title to record (defaults to the file name).
    #[arg(short, long)]
    pub title: Option<String>,
    /// Author to record.
    #[arg(short, long)]
    pub author: Option<String>,
    /// Publication year to record.
    #[arg(short, long)]
    pub year: Option<u32>,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    pub book_id: i64,
    /// 1-indexed page number.
    pub number: usize,
}

#[derive(Debug, Args)]
pub struct ChapterArgs {
    pub book_id: i64,
    /// 1-indexed chapter number.
    pub number: u32,
}

#[derive(Debug, Subcommand)]
pub enum BookmarkCommand {
    /// Save a reading position.
    Add {
        book_id: i64,
        /// 1-indexed page number to bookmark.
        page: u32,
        /// Optional note to keep with the bookmark.
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List a book's bookmarks in page order.
    List { book_id: i64 },
}

impl SearchArgs {
    /// Check ranges and assemble the query.
    ///
    /// Everything here mirrors what a caller could get wrong: a zero or
    /// oversized limit, years outside the plausible window, or an inverted
    /// year range.
    pub fn into_query(self, config: &Config) -> Result<SearchQuery> {
        let limit = self.limit.unwrap_or(config.search.default_limit);
        if limit == 0 || limit > config.search.max_limit {
            exn::bail!(ErrorKind::InvalidArgument(format!(
                "limit must be between 1 and {}",
                config.search.max_limit
            )));
        }
        for year in [self.year, self.min_year, self.max_year].into_iter().flatten() {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                exn::bail!(ErrorKind::InvalidArgument(format!(
                    "year must be between {MIN_YEAR} and {MAX_YEAR}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min_year, self.max_year)
            && min > max
        {
            exn::bail!(ErrorKind::InvalidArgument("min-year must not exceed max-year".to_string()));
        }
        Ok(SearchQuery {
            title: self.title,
            author: self.author,
            year: self.year,
            min_year: self.min_year,
            max_year: self.max_year,
            limit,
            sort_by: self.sort,
        })
    }
}
