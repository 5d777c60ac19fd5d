//! Client for the Roster GraphQL API.
//!
//! Uses `graphql_client` for type-safe operations with `reqwest` 0.13 for
//! HTTP. The [`UserDirectory`] trait is the seam the editing session talks
//! through, so the session can be driven by an in-memory directory in tests.

mod conversions;
pub mod queries;

use std::future::Future;
use std::sync::Arc;

use graphql_client::{GraphQLQuery, Response};
use roster_core::{NewUser, User, UserId, UserPatch};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use queries::{
    CreateUser, DeleteUser, GetUsers, UpdateUser, create_user, delete_user, get_users, update_user,
};

/// Errors that can occur when talking to the directory.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// GraphQL response carried errors.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQL(Vec<String>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response had neither data nor errors.
    #[error("response contained no data")]
    EmptyResponse,
}

/// Operations the directory exposes.
///
/// `update_user` and `delete_user` resolve to `Ok(None)` when the ID is
/// unknown; that is not an error.
pub trait UserDirectory {
    /// Fetch every user, in store order.
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ClientError>> + Send;

    /// Create a user.
    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<User, ClientError>> + Send;

    /// Patch a user.
    fn update_user(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> impl Future<Output = Result<Option<User>, ClientError>> + Send;

    /// Delete a user, returning its last value.
    fn delete_user(&self, id: &UserId)
    -> impl Future<Output = Result<Option<User>, ClientError>> + Send;
}

// =============================================================================
// DirectoryClient
// =============================================================================

/// HTTP client for the directory's GraphQL endpoint.
#[derive(Clone)]
pub struct DirectoryClient {
    inner: Arc<DirectoryClientInner>,
}

struct DirectoryClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl DirectoryClient {
    /// Create a client for the GraphQL endpoint at `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Arc::new(DirectoryClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ClientError> {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        // GraphQL errors come back with 400; prefer their messages over the status.
        let parsed: Result<Response<Q::ResponseData>, _> = serde_json::from_str(&response_text);

        if !status.is_success() {
            if let Ok(Response {
                errors: Some(errors),
                ..
            }) = parsed
                && !errors.is_empty()
            {
                return Err(graphql_errors(errors));
            }
            tracing::warn!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Directory returned non-success status"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: response_text.chars().take(200).collect(),
            });
        }

        let response = match parsed {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse GraphQL response"
                );
                return Err(ClientError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(graphql_errors(errors));
        }

        response.data.ok_or(ClientError::EmptyResponse)
    }
}

fn graphql_errors(errors: Vec<graphql_client::Error>) -> ClientError {
    ClientError::GraphQL(errors.into_iter().map(|e| e.message).collect())
}

impl UserDirectory for DirectoryClient {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let data = self.execute::<GetUsers>(get_users::Variables).await?;
        Ok(data.users.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        let variables = create_user::Variables {
            name: user.name.clone(),
            email: user.email.clone(),
        };
        let data = self.execute::<CreateUser>(variables).await?;
        Ok(data.create_user.into())
    }

    #[instrument(skip(self))]
    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<Option<User>, ClientError> {
        let variables = update_user::Variables {
            id: id.to_string(),
            name: patch.name.clone(),
            email: patch.email.clone(),
        };
        let data = self.execute::<UpdateUser>(variables).await?;
        Ok(data.update_user.map(User::from))
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: &UserId) -> Result<Option<User>, ClientError> {
        let variables = delete_user::Variables { id: id.to_string() };
        let data = self.execute::<DeleteUser>(variables).await?;
        Ok(data.delete_user.map(User::from))
    }
}
