use crate::model::{Author as ModelAuthor, Post as ModelPost};
use crate::storage::SharedStore;
use async_graphql::{ComplexObject, Context, SimpleObject};

/// Fetches the shared store injected into the schema.
pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: Option<String>,
}

#[ComplexObject]
impl Author {
    /// The list of posts by this author
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let posts = store(ctx)?.read().posts_by_author(self.id);
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: Some(a.name),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: i32,
    pub title: Option<String>,
    pub votes: Option<i32>,
    #[graphql(skip)]
    pub author_id: i32,
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = store(ctx)?.read().find_author_by_id(self.author_id);
        if author.is_none() {
            tracing::warn!(
                post = self.id,
                author = self.author_id,
                "Post references missing author"
            );
        }
        Ok(author.map(Author::from))
    }
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: p.id,
            title: Some(p.title),
            votes: Some(p.votes),
            author_id: p.author_id,
        }
    }
}
