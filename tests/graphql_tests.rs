use postboard::config::GraphqlSettings;
use postboard::error::PostboardError;
use postboard::graphql::{
    Operation, OperationName, PostboardSchema, Selection, build_schema, execute,
};
use postboard::model::{Author, Post};
use postboard::storage::{PostStore, SharedStore};
use serde_json::json;

fn setup() -> (PostboardSchema, SharedStore) {
    let store = PostStore::seeded().into_shared();
    let schema = build_schema(store.clone(), &GraphqlSettings::default());
    (schema, store)
}

fn select(text: &str) -> Selection {
    Selection::parse(text).unwrap()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_post_by_id_returns_that_post() {
    let (schema, _) = setup();
    for id in 1..=4 {
        let op = Operation::new(OperationName::Post, select("id")).arg("id", id);
        let value = execute(&schema, &op).await.unwrap();
        assert_eq!(value["id"], id);
    }
}

#[tokio::test]
async fn test_post_nested_round_trip() {
    let (schema, _) = setup();
    let op = Operation::new(
        OperationName::Post,
        select("title author { name posts { title } }"),
    )
    .arg("id", 1);

    let value = execute(&schema, &op).await.unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Introduction to GraphQL",
            "author": {
                "name": "Tom Coleman",
                "posts": [{ "title": "Introduction to GraphQL" }]
            }
        })
    );
}

#[tokio::test]
async fn test_posts_count_and_order() {
    let (schema, _) = setup();
    let op = Operation::new(OperationName::Posts, select("id"));
    let value = execute(&schema, &op).await.unwrap();
    assert_eq!(value, json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }, { "id": 4 }]));
}

#[tokio::test]
async fn test_get_author_posts() {
    let (schema, _) = setup();
    let op = Operation::new(OperationName::GetAuthor, select("posts { title }")).arg("id", 2);
    let value = execute(&schema, &op).await.unwrap();
    assert_eq!(
        value["posts"],
        json!([{ "title": "Welcome to Apollo" }, { "title": "Advanced GraphQL" }])
    );
}

#[tokio::test]
async fn test_absent_entity_is_null() {
    let (schema, _) = setup();
    let op = Operation::new(OperationName::GetAuthor, select("name")).arg("id", 77);
    assert_eq!(execute(&schema, &op).await.unwrap(), serde_json::Value::Null);
}

#[tokio::test]
async fn test_unknown_field_is_request_error() {
    let (schema, _) = setup();
    let op = Operation::new(OperationName::Post, select("authorId")).arg("id", 1);
    assert!(matches!(
        execute(&schema, &op).await,
        Err(PostboardError::Graphql(_))
    ));
}

// =============================================================================
// Mutation
// =============================================================================

#[tokio::test]
async fn test_upvote_twice_adds_two() {
    let (schema, store) = setup();
    let op = Operation::new(OperationName::UpvotePost, select("id votes")).arg("postId", 2);

    let first = execute(&schema, &op).await.unwrap();
    assert_eq!(first, json!({ "id": 2, "votes": 4 }));

    execute(&schema, &op).await.unwrap();
    assert_eq!(store.read().find_post_by_id(2).unwrap().votes, 5);
}

#[tokio::test]
async fn test_upvote_unknown_post_is_not_found() {
    let (schema, store) = setup();
    let before = store.read().posts();

    let op = Operation::new(OperationName::UpvotePost, select("votes")).arg("postId", 99);
    match execute(&schema, &op).await {
        Err(PostboardError::NotFound(msg)) => {
            assert_eq!(msg, "Couldn't find post with id 99");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(store.read().posts(), before);
}

#[tokio::test]
async fn test_malformed_argument_is_validation_error() {
    let (schema, store) = setup();
    let before = store.read().posts();

    let op = Operation::new(OperationName::UpvotePost, select("votes")).arg("postId", "1");
    assert!(matches!(
        execute(&schema, &op).await,
        Err(PostboardError::Validation(_))
    ));
    assert_eq!(store.read().posts(), before);
}

#[tokio::test]
async fn test_upvote_past_max_votes_is_validation_error() {
    let store = PostStore::new(
        vec![Author::new(1, "Tom Coleman")],
        vec![Post::new(1, 1, "Full").with_votes(i32::MAX)],
    )
    .unwrap()
    .into_shared();
    let schema = build_schema(store.clone(), &GraphqlSettings::default());

    let op = Operation::new(OperationName::UpvotePost, select("votes")).arg("postId", 1);
    assert!(matches!(
        execute(&schema, &op).await,
        Err(PostboardError::Validation(_))
    ));
    assert_eq!(store.read().find_post_by_id(1).unwrap().votes, i32::MAX);
}

#[tokio::test]
async fn test_upvote_visible_to_later_queries() {
    let (schema, _) = setup();
    let upvote = Operation::new(OperationName::UpvotePost, select("id")).arg("postId", 4);
    execute(&schema, &upvote).await.unwrap();

    let read = Operation::new(OperationName::Post, select("votes")).arg("id", 4);
    assert_eq!(execute(&schema, &read).await.unwrap(), json!({ "votes": 8 }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_upvotes_are_not_lost() {
    let (schema, store) = setup();

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let schema = schema.clone();
        tasks.push(tokio::spawn(async move {
            let op = Operation::new(OperationName::UpvotePost, select("votes")).arg("postId", 3);
            execute(&schema, &op).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.read().find_post_by_id(3).unwrap().votes, 51);
}

// =============================================================================
// Limits
// =============================================================================

#[tokio::test]
async fn test_depth_limit_rejects_deep_requests() {
    let store = PostStore::seeded().into_shared();
    let settings = GraphqlSettings {
        max_depth: Some(3),
        ..GraphqlSettings::default()
    };
    let schema = build_schema(store, &settings);

    let op = Operation::new(
        OperationName::Post,
        select("author { posts { author { name } } }"),
    )
    .arg("id", 1);
    assert!(execute(&schema, &op).await.is_err());
}

#[tokio::test]
async fn test_deep_requests_resolve_without_configured_limits() {
    let (schema, _) = setup();

    // post -> (author -> posts) x 8 -> author -> name: 19 levels.
    let mut selection = Selection::new().nested("author", Selection::new().field("name"));
    for _ in 0..8 {
        selection = Selection::new().nested("author", Selection::new().nested("posts", selection));
    }
    let op = Operation::new(OperationName::Post, selection).arg("id", 1);

    let mut value = execute(&schema, &op).await.unwrap();
    for _ in 0..8 {
        value = value["author"]["posts"][0].take();
    }
    assert_eq!(value, json!({ "author": { "name": "Tom Coleman" } }));
}
