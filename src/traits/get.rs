//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::traits::Resource;
use crate::JsonObject;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```no_run
/// use zoomapi::{Get, ZoomClient};
///
/// # async fn example() -> zoomapi::Result<()> {
/// let client = ZoomClient::from_env()?;
/// let site = client.phone_sites.get("CxZ5mW1aRkuwHsCrSPSzZg").await?;
/// println!("{}", site["name"]);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Get: Resource {
    /// GET `<prefix>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(&self, id: &str) -> Result<JsonObject> {
        let endpoint: &Endpoint = self.endpoint();
        let url = endpoint.url_for(&[id])?;
        endpoint.get_json(url, None).await
    }
}
