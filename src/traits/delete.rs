//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Resource;

/// Delete an entity.
#[async_trait]
pub trait Delete: Resource {
    /// DELETE `<prefix>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(&self, id: &str) -> Result<()> {
        let endpoint = self.endpoint();
        let url = endpoint.url_for(&[id])?;
        endpoint.session().delete(url, None).await?;
        Ok(())
    }
}
