pub mod error;
pub mod http;
pub mod memory;
pub mod relevance;
pub mod source;

pub use error::FetchError;
pub use http::{DEFAULT_BASE_URL, HttpPageSource};
pub use memory::MemoryPageSource;
pub use relevance::{ARTICLE_PREFIX, is_relevant};
pub use source::PageSource;
