//! Phone devices endpoint.

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::session::SharedSession;
use crate::traits::{Create, Delete, Get, List, Resource, Update};

/// Zoom Phone desk phones and other devices (`phone/devices`).
#[derive(Debug, Clone)]
pub struct PhoneDevices {
    endpoint: Endpoint,
}

impl PhoneDevices {
    pub const URI: &'static str = "phone/devices";

    pub fn new(session: SharedSession) -> Self {
        Self {
            endpoint: Endpoint::new(session, Self::URI),
        }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn sync_desk_phones(&self, payload: &Value) -> Result<()> {
        let url = self.endpoint.url_for(&["sync"])?;
        self.endpoint.session().post(url, payload).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn reboot_desk_phone(&self, device_id: &str) -> Result<()> {
        let url = self.endpoint.url_for(&[device_id, "reboot"])?;
        self.endpoint.session().post_empty(url).await?;
        Ok(())
    }

    /// Assign users or common areas to a device.
    #[tracing::instrument(skip(self, payload))]
    pub async fn assign_entities(&self, device_id: &str, payload: &Value) -> Result<()> {
        let url = self.endpoint.url_for(&[device_id, "extensions"])?;
        self.endpoint.session().post(url, payload).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn unassign_entity(&self, device_id: &str, extension_id: &str) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[device_id, "extensions", extension_id])?;
        self.endpoint.session().delete(url, None).await?;
        Ok(())
    }
}

impl Resource for PhoneDevices {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl Get for PhoneDevices {}

impl List for PhoneDevices {
    const ITEMS_KEY: &'static str = "devices";
}

impl Create for PhoneDevices {}

impl Update for PhoneDevices {}

impl Delete for PhoneDevices {}
