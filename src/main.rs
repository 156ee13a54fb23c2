use anyhow::{Context, Result};
use clap::Parser;

use postboard::cli::handlers::{self, CommandContext};
use postboard::cli::{Cli, Commands};
use postboard::config::PostboardConfig;
use postboard::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handlers::handle_init(),
        Commands::Serve { host, port } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_serve(ctx, host, port)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_mutate(ctx, mutation, variables)
        }
        Commands::Run {
            operation,
            args,
            select,
        } => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_run(ctx, operation, args, select)
        }
        Commands::Schema => {
            let ctx = load_context(&cli.config)?;
            handlers::handle_schema(ctx)
        }
    }
}

fn load_context(config: &Option<std::path::PathBuf>) -> Result<CommandContext> {
    let (config, path) = match config {
        Some(path) => {
            let config = PostboardConfig::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, Some(path.clone()))
        }
        None => {
            let cwd = std::env::current_dir()?;
            PostboardConfig::load(&cwd).context("Failed to load postboard configuration")?
        }
    };
    Ok(CommandContext::new(config, path))
}
