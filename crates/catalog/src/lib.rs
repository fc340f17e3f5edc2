pub mod error;
mod matcher;
pub mod models;
pub mod query;
mod rank;
mod scorer;
mod search;

pub use crate::models::{BookRecord, RawRecord};
pub use crate::query::{SearchQuery, SortBy};
pub use crate::search::{SearchHit, search};
