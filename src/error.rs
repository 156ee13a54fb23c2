use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl PostboardError {
    /// Machine-readable code attached to GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            PostboardError::NotFound(_) => "NOT_FOUND",
            PostboardError::Validation(_) => "BAD_USER_INPUT",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for PostboardError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, PostboardError>;
