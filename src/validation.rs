//! Input validation for store contents and operation arguments.

use crate::error::{PostboardError, Result};
use crate::model::Post;
use std::collections::HashSet;

/// Validates that no id appears twice within one collection.
pub fn validate_unique_ids(kind: &str, ids: impl IntoIterator<Item = i32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PostboardError::Validation(format!(
                "Duplicate {} id: {}",
                kind, id
            )));
        }
    }
    Ok(())
}

/// Validates that a post references an existing author.
pub fn validate_author_exists<F>(post: &Post, author_exists: F) -> Result<()>
where
    F: Fn(i32) -> bool,
{
    if !author_exists(post.author_id) {
        return Err(PostboardError::Validation(format!(
            "Post {} references unknown author {}",
            post.id, post.author_id
        )));
    }
    Ok(())
}

/// Coerces a JSON argument value to a GraphQL `Int`.
///
/// Only JSON integers within the 32-bit signed range are accepted.
pub fn coerce_int(name: &str, value: &serde_json::Value) -> Result<i32> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| {
            PostboardError::Validation(format!(
                "Argument '{}' must be an Int, got {}",
                name, value
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("post", [1, 2, 3]).is_ok());
        assert!(validate_unique_ids("post", [1, 2, 1]).is_err());
        assert!(validate_unique_ids("post", []).is_ok());
    }

    #[test]
    fn test_validate_author_exists() {
        let post = Post::new(1, 5, "Title");
        assert!(validate_author_exists(&post, |id| id == 5).is_ok());
        assert!(validate_author_exists(&post, |_| false).is_err());
    }

    #[test]
    fn test_coerce_int_accepts_integers() {
        assert_eq!(coerce_int("id", &json!(3)).unwrap(), 3);
        assert_eq!(coerce_int("id", &json!(-1)).unwrap(), -1);
    }

    #[test]
    fn test_coerce_int_rejects_malformed() {
        assert!(coerce_int("id", &json!("1")).is_err());
        assert!(coerce_int("id", &json!(1.5)).is_err());
        assert!(coerce_int("id", &json!(null)).is_err());
        assert!(coerce_int("id", &json!(i64::from(i32::MAX) + 1)).is_err());
    }
}
