//! Content parsing and post models

pub mod frontmatter;
pub mod markdown;
pub mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{sort_records, PostRecord};
