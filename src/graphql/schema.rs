use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::config::GraphqlSettings;
use crate::storage::SharedStore;

use super::types::*;

pub type PostboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around an explicitly owned store.
///
/// Depth and complexity limits are applied only when the `graphql` config
/// section sets them; otherwise the request shape alone bounds resolution.
pub fn build_schema(store: SharedStore, settings: &GraphqlSettings) -> PostboardSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);

    if let Some(depth) = settings.max_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = settings.max_complexity {
        builder = builder.limit_complexity(complexity);
    }

    builder.finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single post by ID
    async fn post(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Post>> {
        tracing::debug!(id, "Resolving post");
        let post = store(ctx)?.read().find_post_by_id(id);
        Ok(post.map(Post::from))
    }

    /// List all posts in insertion order
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let posts = store(ctx)?.read().posts();
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Get a single author by ID
    async fn get_author(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<Option<Author>> {
        tracing::debug!(id, "Resolving author");
        let author = store(ctx)?.read().find_author_by_id(id);
        Ok(author.map(Author::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add one vote to a post
    async fn upvote_post(&self, ctx: &Context<'_>, post_id: i32) -> async_graphql::Result<Post> {
        let post = store(ctx)?
            .write()
            .increment_votes(post_id)
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }
}
