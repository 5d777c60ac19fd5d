//! HTTP route handlers for the record store.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # GraphQL
//! POST /graphql                - Execute a query or mutation
//! GET  /graphql/schema         - Schema SDL
//! ```

pub mod graphql;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::graphql::{RosterSchema, build_schema};
use crate::state::AppState;

/// Create the GraphQL routes router.
pub fn graphql_routes() -> Router<RosterSchema> {
    Router::new()
        .route("/graphql", post(graphql::execute))
        .route("/graphql/schema", get(graphql::schema))
}

/// Create all routes for the server.
pub fn routes() -> Router<RosterSchema> {
    Router::new()
        .route("/health", get(health))
        .merge(graphql_routes())
}

/// Build the full application with state and HTTP layers applied.
///
/// Browser clients call the endpoint cross-origin, so CORS is permissive.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(build_schema(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
