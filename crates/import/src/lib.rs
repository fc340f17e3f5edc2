//! Plain-text book import.
//!
//! Takes a `.txt` file (or already-extracted text), normalizes it, and files
//! it into the library database along with its chapter split. Metadata not
//! supplied by the caller falls back to what the file itself can tell us:
//! the file stem becomes the title, the author defaults to unknown.

pub mod error;
mod txt;

pub use crate::txt::{ImportReport, Overrides, import_text, import_txt};
