//! Sample data loaded at startup.

use crate::model::{Author, Post};

pub fn authors() -> Vec<Author> {
    vec![
        Author::new(1, "Tom Coleman"),
        Author::new(2, "Sashko Stubailo"),
        Author::new(3, "Mikhail Novikov"),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post::new(1, 1, "Introduction to GraphQL").with_votes(2),
        Post::new(2, 2, "Welcome to Apollo").with_votes(3),
        Post::new(3, 2, "Advanced GraphQL").with_votes(1),
        Post::new(4, 3, "Launchpad is Cool").with_votes(7),
    ]
}
