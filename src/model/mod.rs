//! Data models for postboard.
//!
//! - [`Author`]: a writer, identified by a stable integer id
//! - [`Post`]: an article owned by one author, carrying a vote count

mod author;
mod post;

pub use author::Author;
pub use post::Post;
