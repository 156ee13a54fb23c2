use anyhow::Result;
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }

    let schema = ctx.schema();
    let settings = &ctx.config.server;

    if let Some(ref path) = ctx.config_path {
        tracing::debug!(config = %path.display(), "Loaded configuration");
    }

    println!(
        "{} GraphQL server on http://localhost:{}/graphql",
        "Starting".green(),
        settings.port
    );
    if settings.enable_playground {
        println!("GraphiQL: http://localhost:{}/", settings.port);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, settings))?;
    Ok(())
}
