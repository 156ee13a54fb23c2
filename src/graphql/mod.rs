//! GraphQL schema and resolvers for postboard.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! postboard serve --port 8000
//!
//! # Execute a query from CLI
//! postboard query '{ getAuthor(id: 2) { name posts { title } } }'
//!
//! # Execute a mutation from CLI
//! postboard mutate 'upvotePost(postId: 1) { id votes }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `post`, `posts`, `getAuthor`
//! - **Mutations**: `upvotePost`
//!
//! Every field has its own resolver. Plain attributes are read off the
//! record; `Author.posts` and `Post.author` go back to the store.

mod operation;
mod schema;
mod server;
mod types;

pub use operation::{
    Field, MAX_SELECTION_DEPTH, Operation, OperationName, Selection, execute,
};
pub use schema::{MutationRoot, PostboardSchema, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::{Author, Post};
