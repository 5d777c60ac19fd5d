//! End-to-end test support for Roster.
//!
//! [`TestServer`] runs the real router on an ephemeral local port, so tests
//! talk to it over HTTP exactly as the `roster` binary does.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p roster-integration-tests
//! ```

use std::net::SocketAddr;

use roster_cli::DirectoryClient;
use roster_server::AppState;
use roster_server::config::ServerConfig;
use roster_server::store::UserStore;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// A running server bound to `127.0.0.1` on a free port.
///
/// The server task is aborted when this value is dropped.
pub struct TestServer {
    addr: SocketAddr,
    state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server seeded with Alice (`"1"`) and Bob (`"2"`).
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn() -> Self {
        Self::spawn_with(AppState::new(&ServerConfig::default())).await
    }

    /// Start a server with an empty store.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(AppState::from_store(UserStore::new())).await
    }

    async fn spawn_with(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read test listener address");

        let app = roster_server::app(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL of the GraphQL endpoint.
    ///
    /// # Panics
    ///
    /// Never in practice; the address always forms a valid URL.
    #[must_use]
    pub fn graphql_url(&self) -> Url {
        Url::parse(&format!("{}/graphql", self.base_url())).expect("Invalid test server URL")
    }

    /// A typed client pointed at this server.
    #[must_use]
    pub fn client(&self) -> DirectoryClient {
        DirectoryClient::new(self.graphql_url())
    }

    /// Shared state, for inspecting the store directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
