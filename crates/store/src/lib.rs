//! SQLite-backed library database.
//!
//! Imported books live here in full: record metadata, the cleaned text, and
//! the chapter split. Searches against this store fetch every record and run
//! them through the same in-memory pipeline the dataset store uses, so both
//! stores rank results identically.

mod db;
pub mod error;
pub mod models;
mod repo;

pub use crate::db::Database;
pub use crate::repo::Repository;
