//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ROSTER_ENDPOINT` - GraphQL endpoint URL (default: http://127.0.0.1:4000/graphql)
//!
//! The `--endpoint` flag takes precedence over the environment.

use thiserror::Error;
use url::Url;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4000/graphql";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid endpoint {0:?}: {1}")]
    InvalidEndpoint(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint of the record store
    pub endpoint: Url,
}

impl ClientConfig {
    /// Load configuration, preferring `endpoint_override` over the environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint is not an http(s) URL.
    pub fn from_env(endpoint_override: Option<&str>) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match endpoint_override {
            Some(endpoint) => Ok(Self {
                endpoint: parse_endpoint(endpoint)?,
            }),
            None => {
                let raw = std::env::var("ROSTER_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
                let endpoint = parse_endpoint(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("ROSTER_ENDPOINT".to_string(), e.to_string())
                })?;
                Ok(Self { endpoint })
            }
        }
    }
}

/// Parse and check an endpoint URL.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEndpoint` for unparsable or non-http(s) URLs.
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint(raw.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint(
            raw.to_string(),
            format!("unsupported scheme {other:?}"),
        )),
    }
}
