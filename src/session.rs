//! Authenticated HTTP session.
//!
//! The single transport point shared by every endpoint. Attaches the bearer
//! credential, applies the TLS policy and turns non-2xx responses into
//! [`ZoomError::ServerFault`].

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::Serialize;
use url::Url;

use crate::error::{Result, ZoomError};
use crate::params::Params;

/// Production root of the Zoom REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

const USER_AGENT: &str = concat!("zoomapi/", env!("CARGO_PKG_VERSION"));

/// Transport settings for a [`ZoomSession`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Verify the server's TLS certificate.
    pub verify: bool,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Upper bound on pages fetched by a single paged listing.
    /// `None` follows continuation tokens until the API stops sending them.
    pub max_pages: Option<u32>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            verify: true,
            timeout: Duration::from_secs(300),
            max_pages: None,
        }
    }
}

/// Authenticated transport shared by all endpoints.
///
/// Immutable after construction. Wrap it in an [`Arc`] to share it; the
/// underlying `reqwest::Client` pools connections internally.
///
/// # Example
///
/// ```no_run
/// use zoomapi::ZoomSession;
///
/// # async fn example() -> zoomapi::Result<()> {
/// let session = ZoomSession::new("access-token", "https://api.zoom.us/v2", true)?;
/// let url = session.base_url().join("phone/sites")?;
/// let response = session.get(url, None).await?;
/// # Ok(())
/// # }
/// ```
pub struct ZoomSession {
    http: Client,
    base_url: Url,
    token: String,
    verify: bool,
    max_pages: Option<u32>,
}

impl std::fmt::Debug for ZoomSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomSession")
            .field("base_url", &self.base_url.as_str())
            .field("verify", &self.verify)
            .finish_non_exhaustive()
    }
}

impl ZoomSession {
    /// Create a session with the default timeout and no page bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str, verify: bool) -> Result<Self> {
        Self::with_options(
            token,
            base_url,
            SessionOptions {
                verify,
                ..Default::default()
            },
        )
    }

    /// Create a session with explicit transport options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn with_options(token: &str, base_url: &str, options: SessionOptions) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;
        if base_url.cannot_be_a_base() {
            return Err(ZoomError::InvalidBaseUrl(base_url_str));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(options.timeout)
            .danger_accept_invalid_certs(!options.verify)
            .build()
            .map_err(ZoomError::HttpError)?;

        if !options.verify {
            tracing::warn!(base_url = %base_url, "TLS certificate verification disabled");
        }

        Ok(Self {
            http,
            base_url,
            token: token.to_string(),
            verify: options.verify,
            max_pages: options.max_pages,
        })
    }

    /// Create a session from environment variables.
    ///
    /// Reads `ZOOM_ACCESS_TOKEN` (required), `ZOOM_API_URL` (defaults to
    /// [`DEFAULT_BASE_URL`]) and `ZOOM_VERIFY_TLS` (`false`, `0` or `no`
    /// disables verification).
    ///
    /// # Errors
    ///
    /// Returns an error if `ZOOM_ACCESS_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(SessionOptions::default())
    }

    /// [`ZoomSession::from_env`] starting from `options`.
    ///
    /// `ZOOM_VERIFY_TLS`, when set, overrides `options.verify`.
    ///
    /// # Errors
    ///
    /// Returns an error if `ZOOM_ACCESS_TOKEN` is not set.
    pub fn from_env_with(mut options: SessionOptions) -> Result<Self> {
        let token = env::var("ZOOM_ACCESS_TOKEN").map_err(|_| {
            ZoomError::ConfigMissing("ZOOM_ACCESS_TOKEN environment variable not set".to_string())
        })?;

        let base_url = env::var("ZOOM_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if let Ok(v) = env::var("ZOOM_VERIFY_TLS") {
            options.verify = parse_flag(&v);
        }

        Self::with_options(&token, &base_url, options)
    }

    /// The base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether TLS certificates are verified.
    pub fn verify(&self) -> bool {
        self.verify
    }

    /// Page bound applied to paged listings.
    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Send a request and fail on any non-2xx status.
    ///
    /// `body` is sent as JSON; `params` becomes the query string with list
    /// values as repeated keys.
    #[tracing::instrument(skip(self, url, body, params), fields(url = %url))]
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        params: Option<&Params>,
    ) -> Result<Response> {
        let mut request = self.http.request(method, url).bearer_auth(&self.token);

        if let Some(params) = params.filter(|p| !p.is_empty()) {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ZoomError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request.
    pub async fn get(&self, url: Url, params: Option<&Params>) -> Result<Response> {
        self.request::<()>(Method::GET, url, None, params).await
    }

    /// Make a POST request with JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Response> {
        self.request(Method::POST, url, Some(body), None).await
    }

    /// Make a POST request without a body.
    pub async fn post_empty(&self, url: Url) -> Result<Response> {
        self.request::<()>(Method::POST, url, None, None).await
    }

    /// Make a PATCH request with JSON body.
    pub async fn patch<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Response> {
        self.request(Method::PATCH, url, Some(body), None).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, url: Url, params: Option<&Params>) -> Result<Response> {
        self.request::<()>(Method::DELETE, url, None, params).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let fault = ZoomError::from_response(status.as_u16(), &text);
        tracing::warn!(status = status.as_u16(), error = %fault, "request failed");
        Err(fault)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no"
    )
}

/// Session handle shared between endpoints.
pub type SharedSession = Arc<ZoomSession>;
