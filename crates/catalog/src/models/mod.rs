mod book;
mod raw;

pub use self::book::BookRecord;
pub use self::raw::RawRecord;
