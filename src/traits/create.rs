//! Create trait for adding entities.

use async_trait::async_trait;
use serde_json::Value;

use crate::endpoint::decode;
use crate::error::Result;
use crate::traits::Resource;
use crate::JsonObject;

/// Create a new entity.
#[async_trait]
pub trait Create: Resource {
    /// POST `payload` to `<prefix>` and return the created entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    async fn create(&self, payload: &Value) -> Result<JsonObject> {
        let endpoint = self.endpoint();
        let url = endpoint.url_for(&[])?;
        let response = endpoint.session().post(url, payload).await?;
        decode(response).await
    }
}
