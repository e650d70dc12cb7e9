//! Top-level Zoom API client.

use std::sync::Arc;

use crate::error::Result;
use crate::phone::{PhoneCommonAreas, PhoneDevices, PhoneSites};
use crate::session::{SessionOptions, SharedSession, ZoomSession};

/// Zoom API client.
///
/// Wires one [`ZoomSession`] to every resource endpoint. Endpoints share
/// the session, so they all use the same credential and TLS policy.
///
/// # Example
///
/// ```no_run
/// use zoomapi::{Get, ZoomClient};
///
/// # async fn example() -> zoomapi::Result<()> {
/// // Create from environment variables
/// let client = ZoomClient::from_env()?;
///
/// // Or configure manually
/// let client = ZoomClient::new("access-token", zoomapi::DEFAULT_BASE_URL, true)?;
/// let device = client.phone_devices.get("dev_123").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ZoomClient {
    session: SharedSession,
    pub phone_sites: PhoneSites,
    pub phone_devices: PhoneDevices,
    pub phone_common_areas: PhoneCommonAreas,
}

impl ZoomClient {
    /// Create a client with the provided token and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str, verify: bool) -> Result<Self> {
        Ok(Self::from_session(ZoomSession::new(token, base_url, verify)?))
    }

    /// Create a client with explicit transport options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_options(token: &str, base_url: &str, options: SessionOptions) -> Result<Self> {
        Ok(Self::from_session(ZoomSession::with_options(
            token, base_url, options,
        )?))
    }

    /// Create a client from environment variables.
    ///
    /// See [`ZoomSession::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `ZOOM_ACCESS_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_session(ZoomSession::from_env()?))
    }

    /// [`ZoomClient::from_env`] starting from explicit transport options.
    ///
    /// # Errors
    ///
    /// Returns an error if `ZOOM_ACCESS_TOKEN` is not set.
    pub fn from_env_with(options: SessionOptions) -> Result<Self> {
        Ok(Self::from_session(ZoomSession::from_env_with(options)?))
    }

    /// Build every endpoint on top of an existing session.
    pub fn from_session(session: ZoomSession) -> Self {
        let session = Arc::new(session);
        Self {
            phone_sites: PhoneSites::new(Arc::clone(&session)),
            phone_devices: PhoneDevices::new(Arc::clone(&session)),
            phone_common_areas: PhoneCommonAreas::new(Arc::clone(&session)),
            session,
        }
    }

    /// The session shared by every endpoint.
    pub fn session(&self) -> &ZoomSession {
        &self.session
    }
}
