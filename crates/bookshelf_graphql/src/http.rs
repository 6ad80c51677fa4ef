//! HTTP transport for the GraphQL schema.
//!
//! # Responsibility
//! - Accept GraphQL-over-HTTP POST requests at `/graphql`.
//! - Optionally serve a GraphiQL page on GET `/graphql`.
//! - Expose a plain-text liveness probe at `/health`.

use crate::BookshelfSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tokio::net::TcpListener;
use uuid::Uuid;

pub const GRAPHQL_PATH: &str = "/graphql";

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Serve the GraphiQL explorer on GET `/graphql`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builds the application router around an executable schema.
pub fn router(schema: BookshelfSchema, config: &ServerConfig) -> Router {
    let graphql = if config.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(GRAPHQL_PATH, graphql)
        .route("/health", get(health))
        .with_state(schema)
}

/// Binds the configured address and serves until the process stops.
pub async fn serve(schema: BookshelfSchema, config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "event=server_start module=http status=ok addr={} graphiql={}",
        addr, config.graphiql
    );

    axum::serve(listener, router(schema, config)).await
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request_id = Uuid::new_v4();
    let started_at = Instant::now();
    let response = schema.execute(request.into_inner()).await;

    if response.errors.is_empty() {
        info!(
            "event=graphql_request module=http status=ok request_id={} duration_ms={}",
            request_id,
            started_at.elapsed().as_millis()
        );
    } else {
        warn!(
            "event=graphql_request module=http status=error request_id={} duration_ms={} error_count={}",
            request_id,
            started_at.elapsed().as_millis(),
            response.errors.len()
        );
    }

    response.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}
