//! GraphQL endpoint handlers.

use async_graphql::Value;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::graphql::RosterSchema;

/// Execute a GraphQL request against the store.
///
/// # Errors
///
/// Returns `AppError::GraphQL` (400) when the request fails before any data
/// is produced, such as a syntax error, an unknown field or a missing
/// argument. Nothing has been applied to the store in that case.
#[instrument(skip_all)]
pub async fn execute(
    State(schema): State<RosterSchema>,
    request: GraphQLRequest,
) -> Result<GraphQLResponse> {
    let request = request.into_inner();
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("anonymous"),
        "GraphQL request"
    );

    let response = schema.execute(request).await;
    if response.is_err() && response.data == Value::Null {
        return Err(AppError::GraphQL(Box::new(response)));
    }
    Ok(response.into())
}

/// Serve the schema SDL.
pub async fn schema(State(schema): State<RosterSchema>) -> String {
    schema.sdl()
}
