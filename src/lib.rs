//! # Postboard - a small GraphQL API over authors and posts
//!
//! Two in-memory collections, authors and posts, are exposed through a
//! GraphQL schema with three queries and one mutation. Relationships are
//! resolved per field, so a request can walk `post -> author -> posts -> ...`
//! as deep as it asks.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API with GraphiQL on http://localhost:8000/graphql
//! postboard serve
//!
//! # Query from the command line
//! postboard query '{ post(id: 1) { title author { name } } }'
//!
//! # Upvote a post
//! postboard mutate 'upvotePost(postId: 1) { votes }'
//!
//! # Run one operation by name
//! postboard run getAuthor --arg id=2 --select 'name posts { title }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and the HTTP server
//! - [`model`]: Data models (Author, Post)
//! - [`storage`]: The in-memory store
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.postboard.yml` configuration files and discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PostboardError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying authors and posts.
pub mod graphql;

/// Logging setup.
///
/// Installs the tracing subscriber for stderr and optional JSON log files.
pub mod logging;

/// Data models for authors and posts.
pub mod model;

/// In-memory storage layer.
pub mod storage;

/// Input validation utilities.
///
/// Validates store contents and coerces operation arguments.
pub mod validation;
