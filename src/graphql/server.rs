//! GraphQL HTTP server.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::{debug, info};

use super::PostboardSchema;
use crate::config::ServerSettings;

/// Builds the router: `/graphql` for queries and GraphiQL, `/health` for liveness checks.
pub fn router(schema: PostboardSchema, settings: &ServerSettings) -> Router {
    let mut app = Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_check));

    if settings.enable_playground {
        app = app.route("/", get(graphql_playground));
    }

    app.with_state(schema)
}

/// Serves the schema until Ctrl-C.
pub async fn run_server(
    schema: PostboardSchema,
    settings: &ServerSettings,
) -> Result<(), std::io::Error> {
    let app = router(schema, settings);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, "GraphQL server listening on http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

async fn graphql_handler(
    State(schema): State<PostboardSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner();
    debug!(operation = ?request.operation_name, "Handling GraphQL request");
    schema.execute(request).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health_check() -> &'static str {
    "OK"
}
