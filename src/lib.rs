//! Zoom Phone API client library.
//!
//! A Rust library for the Zoom Phone management REST API (sites, devices,
//! common areas). One authenticated [`ZoomSession`] is shared by every
//! resource endpoint; each endpoint opts into the CRUD capabilities its API
//! exposes through the [`Get`], [`List`], [`Create`], [`Update`] and
//! [`Delete`] traits.
//!
//! # Quick Start
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use zoomapi::{Get, List, Params, SiteSettingType, ZoomClient};
//!
//! #[tokio::main]
//! async fn main() -> zoomapi::Result<()> {
//!     // Create client from environment variables
//!     let client = ZoomClient::from_env()?;
//!
//!     // Page through every site lazily
//!     let mut sites = client.phone_sites.list(Params::new());
//!     while let Some(site) = sites.try_next().await? {
//!         println!("Site: {}", site["name"]);
//!     }
//!
//!     // Read one site's holiday hours
//!     let hours = client
//!         .phone_sites
//!         .get_settings("CxZ5mW1aRkuwHsCrSPSzZg", Some(SiteSettingType::HolidayHours))
//!         .await?;
//!     println!("{hours:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every non-2xx response becomes [`ZoomError::ServerFault`], raised once by
//! the session. Transport failures surface as [`ZoomError::HttpError`] and
//! invalid JSON as [`ZoomError::ParseError`]. Nothing is retried.
//!
//! # Configuration
//!
//! [`ZoomClient::from_env`] reads:
//!
//! - `ZOOM_ACCESS_TOKEN` (required) - OAuth access token
//! - `ZOOM_API_URL` (optional) - Base URL (defaults to `https://api.zoom.us/v2`)
//! - `ZOOM_VERIFY_TLS` (optional) - `false` disables certificate verification

mod client;
mod endpoint;
mod error;
mod pagination;
mod params;
mod phone;
mod session;
mod traits;

pub mod cli;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

/// A decoded JSON object, the shape of every Zoom resource and error body.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// Re-export core types
pub use client::ZoomClient;
pub use endpoint::Endpoint;
pub use error::{Result, ZoomError};
pub use pagination::{ItemStream, Page, NEXT_PAGE_TOKEN};
pub use params::Params;
pub use session::{SessionOptions, SharedSession, ZoomSession, DEFAULT_BASE_URL};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Resource, Update};

// Re-export resource endpoints
pub use phone::{
    CommonAreaSettingType, PhoneCommonAreas, PhoneDevices, PhoneSites, SiteSettingType,
};
