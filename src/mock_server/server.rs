//! Mock Zoom Phone API server.
//!
//! Provides an axum-based HTTP server that simulates the Zoom Phone API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::MockState;

/// A mock Zoom Phone API server for testing.
///
/// The server runs in the background; point a `ZoomClient` at [`url`](Self::url).
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route(
                "/phone/:collection",
                get(handlers::list_records).post(handlers::create_record),
            )
            .route(
                "/phone/:collection/:id",
                get(handlers::get_record)
                    .patch(handlers::update_record)
                    .delete(handlers::delete_record),
            )
            .route("/phone/:collection/:id/settings", get(handlers::get_settings))
            .route(
                "/phone/:collection/:id/settings/:setting_type",
                get(handlers::get_setting),
            )
            .route("/phone/:collection/:id/reboot", post(handlers::reboot_device))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Get, ZoomClient};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_site_with_zoom_client() {
        let server = MockServer::start().await;
        let client = ZoomClient::new("test-token", server.url(), true).unwrap();

        let site = client
            .phone_sites
            .get("site_main")
            .await
            .expect("Failed to get site");

        assert_eq!(site["name"], "Main Office");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = ZoomClient::new("test-token", server.url(), true).unwrap();

        let err = client.phone_sites.get("nonexistent").await.unwrap_err();
        assert!(err.is_not_found());

        server.shutdown().await;
    }
}
