use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: String,

    #[serde(default)]
    pub votes: i32,
}

impl Post {
    pub fn new(id: i32, author_id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            author_id,
            title: title.into(),
            votes: 0,
        }
    }

    pub fn with_votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Adds exactly one vote, returning the new count.
    ///
    /// Returns `None` and leaves the post untouched when the count is at `i32::MAX`.
    pub fn upvote(&mut self) -> Option<i32> {
        self.votes = self.votes.checked_add(1)?;
        Some(self.votes)
    }

    pub fn is_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upvote_adds_one() {
        let mut post = Post::new(1, 1, "Hello").with_votes(2);
        assert_eq!(post.upvote(), Some(3));
        assert_eq!(post.votes, 3);
    }

    #[test]
    fn test_upvote_at_max_is_refused() {
        let mut post = Post::new(1, 1, "Hello").with_votes(i32::MAX);
        assert_eq!(post.upvote(), None);
        assert_eq!(post.votes, i32::MAX);
    }

    #[test]
    fn test_serializes_author_id_camel_case() {
        let post = Post::new(7, 3, "Title");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["authorId"], 3);
        assert_eq!(json["votes"], 0);
    }
}
