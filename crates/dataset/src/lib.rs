pub mod error;
mod snapshot;
mod stats;
mod store;

pub use crate::snapshot::Snapshot;
pub use crate::stats::{DatasetStats, RangeStats};
pub use crate::store::DatasetStore;
