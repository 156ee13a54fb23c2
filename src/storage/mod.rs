//! In-memory storage layer.
//!
//! Authors and posts live in two ordered vectors owned by a [`PostStore`].
//! Lookups are linear scans; the collections are tiny and insertion order is
//! part of the observable behavior.
//!
//! ## Components
//!
//! - [`PostStore`]: lookups, the author-to-posts relationship, and upvotes
//! - [`SharedStore`]: the lock-guarded handle the GraphQL schema holds

mod seed;
mod store;

pub use store::{PostStore, SharedStore};
