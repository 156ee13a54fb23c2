mod init;
mod mutate;
mod query;
mod run;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use run::handle_run;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::PostboardConfig;
use crate::graphql::{PostboardSchema, build_schema};
use crate::storage::PostStore;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PostboardConfig,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: PostboardConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// A schema over a freshly seeded store.
    pub fn schema(&self) -> PostboardSchema {
        build_schema(PostStore::seeded().into_shared(), &self.config.graphql)
    }
}

/// Parses `--variables` JSON, defaulting to no variables.
pub(crate) fn parse_variables(
    variables: Option<String>,
) -> anyhow::Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    })
}
