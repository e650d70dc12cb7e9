//! Mock Zoom Phone API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Zoom
//! Phone API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server keeps state across
//! requests and pages list responses with continuation tokens.
//!
//! # Example
//!
//! ```ignore
//! use futures::TryStreamExt;
//! use zoomapi::mock_server::MockServer;
//! use zoomapi::{List, Params, ZoomClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ZoomClient::new("test-token", server.url(), true).unwrap();
//!
//!     // Server comes with default fixtures
//!     let sites: Vec<_> = client.phone_sites.list(Params::new()).try_collect().await.unwrap();
//!     assert!(!sites.is_empty());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{Collection, MockState};
