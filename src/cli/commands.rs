use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(
    author,
    version,
    about = "A small GraphQL API over in-memory authors and posts"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .postboard.yml by default)
    #[arg(long, global = true, env = "POSTBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .postboard.yml in the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against freshly seeded data
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Run one root operation by name with a field selection
    #[command(visible_alias = "exec")]
    Run {
        /// Operation name: post, posts, getAuthor or upvotePost
        operation: String,

        /// Argument as name=value; the value is read as JSON when it parses
        #[arg(short, long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Fields to return, e.g. "title author { name }"
        #[arg(short, long)]
        select: String,
    },

    /// Print the schema in SDL form
    Schema,
}
