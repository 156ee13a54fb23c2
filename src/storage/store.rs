use super::seed;
use crate::{
    error::{PostboardError, Result},
    model::{Author, Post},
    validation,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Store shared between concurrent requests.
///
/// Readers take the shared lock; [`PostStore::increment_votes`] runs under the
/// exclusive lock so an upvote is never observed half-applied.
pub type SharedStore = Arc<RwLock<PostStore>>;

/// In-memory collections of authors and posts, kept in insertion order.
#[derive(Debug, Clone)]
pub struct PostStore {
    authors: Vec<Author>,
    posts: Vec<Post>,
}

impl PostStore {
    /// Builds a store, rejecting duplicate ids and posts whose author is unknown.
    pub fn new(authors: Vec<Author>, posts: Vec<Post>) -> Result<Self> {
        validation::validate_unique_ids("author", authors.iter().map(|a| a.id))?;
        validation::validate_unique_ids("post", posts.iter().map(|p| p.id))?;
        for post in &posts {
            validation::validate_author_exists(post, |id| authors.iter().any(|a| a.id == id))?;
        }

        Ok(Self { authors, posts })
    }

    /// The fixed sample data the server starts with.
    pub fn seeded() -> Self {
        Self {
            authors: seed::authors(),
            posts: seed::posts(),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    pub fn find_post_by_id(&self, id: i32) -> Option<Post> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }

    pub fn find_author_by_id(&self, id: i32) -> Option<Author> {
        self.authors.iter().find(|a| a.id == id).cloned()
    }

    pub fn posts_by_author(&self, author_id: i32) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.is_by(author_id))
            .cloned()
            .collect()
    }

    pub fn increment_votes(&mut self, post_id: i32) -> Result<Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| {
                PostboardError::NotFound(format!("Couldn't find post with id {}", post_id))
            })?;

        if post.upvote().is_none() {
            return Err(PostboardError::Validation(format!(
                "Post {} already has the maximum number of votes",
                post_id
            )));
        }
        tracing::info!(id = post.id, votes = post.votes, "Upvoted post");

        Ok(post.clone())
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::seeded()
    }
}
