//! List trait for paging through collections.

use async_trait::async_trait;
use futures::TryStreamExt;

use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::Params;
use crate::traits::Resource;
use crate::JsonObject;

/// List entities, following continuation tokens lazily.
///
/// # Example
///
/// ```no_run
/// use futures::TryStreamExt;
/// use zoomapi::{List, Params, ZoomClient};
///
/// # async fn example() -> zoomapi::Result<()> {
/// let client = ZoomClient::from_env()?;
/// let sites: Vec<_> = client
///     .phone_sites
///     .list(Params::new().with("page_size", 100))
///     .try_collect()
///     .await?;
/// println!("Found {} sites", sites.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait List: Resource {
    /// Key holding the items in a list response (e.g. `sites`).
    const ITEMS_KEY: &'static str;

    /// Stream every entity under `<prefix>`.
    ///
    /// Nothing is requested until the stream is polled.
    fn list(&self, params: Params) -> ItemStream<JsonObject> {
        self.endpoint().paged_get_at(&[], Self::ITEMS_KEY, params)
    }

    /// Fetch all entities into memory.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while paging.
    async fn list_all(&self, params: Params) -> Result<Vec<JsonObject>> {
        self.list(params).try_collect().await
    }
}
