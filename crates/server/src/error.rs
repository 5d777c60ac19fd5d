//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Errors are rendered as GraphQL error bodies so
//! clients only have one response shape to parse.

use async_graphql::ServerError;
use async_graphql_axum::GraphQLResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request was rejected before any field executed.
    #[error("GraphQL error: {}", messages(.0))]
    GraphQL(Box<async_graphql::Response>),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn messages(response: &async_graphql::Response) -> String {
    response
        .errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }

        match self {
            Self::GraphQL(response) => {
                (StatusCode::BAD_REQUEST, GraphQLResponse::from(*response)).into_response()
            }
            // Don't expose internal error details to clients
            Self::Internal(_) => {
                let response = async_graphql::Response::from_errors(vec![ServerError::new(
                    "Internal server error",
                    None,
                )]);
                (StatusCode::INTERNAL_SERVER_ERROR, GraphQLResponse::from(response))
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(message: &str) -> AppError {
        AppError::GraphQL(Box::new(async_graphql::Response::from_errors(vec![
            ServerError::new(message, None),
        ])))
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Internal("store lock poisoned".to_string());
        assert_eq!(err.to_string(), "Internal error: store lock poisoned");

        let err = rejected("Unknown field \"nope\"");
        assert_eq!(err.to_string(), "GraphQL error: Unknown field \"nope\"");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(get_status(rejected("bad")), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
