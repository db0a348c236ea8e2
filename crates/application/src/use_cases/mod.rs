//! Application use cases (business logic orchestration).

mod fetch_articles;
mod fetch_comments;

pub use fetch_articles::*;
pub use fetch_comments::*;
