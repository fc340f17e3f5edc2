//! Subcommand handlers for the `tome` binary.

use crate::cli::{BookmarkCommand, Cli, Command, Source};
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use tome_catalog::{BookRecord, SearchHit};
use tome_config::Config;
use tome_dataset::DatasetStore;
use tome_import::Overrides;
use tome_store::{Database, Repository};
use tracing::debug;

pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path).or_raise(|| ErrorKind::Config)?,
        None => Config::load().or_raise(|| ErrorKind::Config)?,
    };
    match cli.command {
        Command::Search(args) => {
            let source = args.source;
            let query = args.into_query(&config)?;
            let hits = match source {
                Source::Dataset => dataset_store(&config)?.search(&query),
                Source::Library => {
                    let db = connect(&config).await?;
                    let hits = Repository::from(&db).search(&query).await.or_raise(|| ErrorKind::Store)?;
                    db.close().await;
                    hits
                },
            };
            if hits.is_empty() {
                println!("no matches");
            }
            for (position, hit) in hits.iter().enumerate() {
                print_hit(position + 1, hit);
            }
        },
        Command::Random(args) => {
            let store = dataset_store(&config)?;
            for record in store.random(args.count) {
                print_record(record);
            }
        },
        Command::Stats => {
            let store = dataset_store(&config)?;
            let stats = store.stats();
            println!("books:        {}", stats.total_books);
            println!("sampled:      {}", stats.sample_size);
            let years = &stats.years;
            println!("years:        {} to {} (average {:.0})", years.min, years.max, years.average);
            let pages = &stats.page_counts;
            println!("page counts:  {} to {} (average {:.0})", pages.min, pages.max, pages.average);
            if !stats.top_authors.is_empty() {
                println!("top authors:");
                for (author, count) in &stats.top_authors {
                    println!("  {count:>4}  {author}");
                }
            }
        },
        Command::Show(args) => match args.source {
            Source::Dataset => {
                let store = dataset_store(&config)?;
                match store.get_by_identifier(&args.id) {
                    Some(record) => print_record(record),
                    None => println!("no record with identifier {:?}", args.id),
                }
            },
            Source::Library => {
                let book_id: i64 = args
                    .id
                    .parse::<i64>()
                    .or_raise(|| ErrorKind::InvalidArgument("library book id must be a number".to_string()))?;
                let db = connect(&config).await?;
                let repo = Repository::from(&db);
                let book = repo.get_book(book_id).await.or_raise(|| ErrorKind::Store)?;
                let chapters = repo.chapter_count(book_id).await.or_raise(|| ErrorKind::Store)?;
                db.close().await;
                print_record(&book.record);
                println!(
                    "  {} words, {} chapters, {} pages",
                    book.word_count,
                    chapters,
                    tome_text::page_count(&book.text)
                );
            },
        },
        Command::Import(args) => {
            let db = connect(&config).await?;
            let repo = Repository::from(&db);
            let overrides = Overrides { title: args.title, author: args.author, year: args.year };
            let report =
                tome_import::import_txt(&repo, &args.path, &overrides).await.or_raise(|| ErrorKind::Import)?;
            db.close().await;
            println!("imported {:?} by {} as book {}", report.title, report.author, report.book_id);
            println!(
                "  {} words, {} chapters, {} pages",
                report.word_count, report.chapter_count, report.page_count
            );
        },
        Command::Page(args) => {
            let db = connect(&config).await?;
            let book = Repository::from(&db).get_book(args.book_id).await.or_raise(|| ErrorKind::Store)?;
            db.close().await;
            let total = tome_text::page_count(&book.text);
            let Some(page) = tome_text::page(&book.text, args.number) else {
                exn::bail!(ErrorKind::InvalidArgument(format!(
                    "page {} out of range (book has {total} pages)",
                    args.number
                )));
            };
            println!("{} - page {}/{}", book.record.title, page.number, total);
            println!();
            println!("{}", page.content);
        },
        Command::Chapter(args) => {
            let db = connect(&config).await?;
            let repo = Repository::from(&db);
            let chapter = repo.get_chapter(args.book_id, args.number).await.or_raise(|| ErrorKind::Store)?;
            db.close().await;
            println!("{}", chapter.content);
        },
        Command::Bookmark(BookmarkCommand::Add { book_id, page, note }) => {
            let db = connect(&config).await?;
            Repository::from(&db)
                .add_bookmark(book_id, page, note.as_deref())
                .await
                .or_raise(|| ErrorKind::Store)?;
            db.close().await;
            println!("bookmarked page {page} of book {book_id}");
        },
        Command::Bookmark(BookmarkCommand::List { book_id }) => {
            let db = connect(&config).await?;
            let marks = Repository::from(&db).list_bookmarks(book_id).await.or_raise(|| ErrorKind::Store)?;
            db.close().await;
            if marks.is_empty() {
                println!("no bookmarks for book {book_id}");
            }
            for mark in marks {
                match mark.note {
                    Some(note) => println!("page {:>5}  {note}", mark.page_number),
                    None => println!("page {:>5}", mark.page_number),
                }
            }
        },
    }
    Ok(())
}

fn dataset_store(config: &Config) -> Result<DatasetStore> {
    let Some(snapshot) = &config.dataset.snapshot else {
        exn::bail!(ErrorKind::NoSnapshot);
    };
    debug!(snapshot = %snapshot.display(), "loading dataset snapshot");
    DatasetStore::open(snapshot).or_raise(|| ErrorKind::Dataset)
}

async fn connect(config: &Config) -> Result<Database> {
    if let Some(parent) = config.store.database.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).or_raise(|| ErrorKind::Store)?;
    }
    Database::connect(&config.store.database).await.or_raise(|| ErrorKind::Store)
}

fn print_hit(position: usize, hit: &SearchHit) {
    println!("{position:>3}. [{:.3}] {} - {}", hit.relevance_score, hit.record.title, hit.record.author);
    print_record_detail(&hit.record);
}

fn print_record(record: &BookRecord) {
    println!("{} - {}", record.title, record.author);
    print_record_detail(record);
}

fn print_record_detail(record: &BookRecord) {
    let year = if record.has_year() { record.year.to_string() } else { "unknown".to_string() };
    print!("     year {year}, {} pages", record.page_count);
    if !record.identifier.is_empty() {
        print!(", id {}", record.identifier);
    }
    println!();
    if !record.source_url.is_empty() {
        println!("     {}", record.source_url);
    }
}
