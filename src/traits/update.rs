//! Update trait for modifying entities.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::Resource;

/// Update an existing entity.
///
/// Zoom answers updates with `204 No Content`, so nothing is returned.
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
/// use zoomapi::{Update, ZoomClient};
///
/// # async fn example() -> zoomapi::Result<()> {
/// let client = ZoomClient::from_env()?;
/// client
///     .phone_devices
///     .update("dev_123", &json!({"display_name": "Lobby phone"}))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Update: Resource {
    /// PATCH `payload` onto `<prefix>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(&self, id: &str, payload: &Value) -> Result<()> {
        let endpoint = self.endpoint();
        let url = endpoint.url_for(&[id])?;
        endpoint.session().patch(url, payload).await?;
        Ok(())
    }
}
