mod chapters;
mod clean;
mod paginate;
mod preview;

pub use crate::chapters::split_chapters;
pub use crate::clean::clean;
pub use crate::paginate::{PAGE_SIZE, Page, page, page_count, pages};
pub use crate::preview::{Preview, preview};
