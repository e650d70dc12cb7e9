//! Phone common areas endpoint.
//!
//! Every `identifier` argument accepts either the common area ID or its
//! extension ID.

use serde_json::Value;

use crate::endpoint::{decode, Endpoint};
use crate::error::Result;
use crate::params::Params;
use crate::phone::CommonAreaSettingType;
use crate::session::SharedSession;
use crate::traits::{Create, Delete, Get, List, Resource, Update};
use crate::JsonObject;

/// Zoom Phone common areas (`phone/common_areas`).
#[derive(Debug, Clone)]
pub struct PhoneCommonAreas {
    endpoint: Endpoint,
}

impl PhoneCommonAreas {
    pub const URI: &'static str = "phone/common_areas";

    pub fn new(session: SharedSession) -> Self {
        Self {
            endpoint: Endpoint::new(session, Self::URI),
        }
    }

    /// Devices the common area is set on.
    #[tracing::instrument(skip(self))]
    pub async fn get_settings(&self, identifier: &str) -> Result<JsonObject> {
        let url = self.endpoint.url_for(&[identifier, "settings"])?;
        self.endpoint.get_json(url, None).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_settings(
        &self,
        identifier: &str,
        setting_type: CommonAreaSettingType,
    ) -> Result<JsonObject> {
        let url = self
            .endpoint
            .url_for(&[identifier, "settings", setting_type.as_str()])?;
        let response = self.endpoint.session().post_empty(url).await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_settings(
        &self,
        identifier: &str,
        setting_type: CommonAreaSettingType,
        payload: &Value,
    ) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[identifier, "settings", setting_type.as_str()])?;
        self.endpoint.session().patch(url, payload).await?;
        Ok(())
    }

    /// Remove a device association from the common area.
    #[tracing::instrument(skip(self))]
    pub async fn delete_settings(
        &self,
        identifier: &str,
        setting_type: CommonAreaSettingType,
        device_id: &str,
    ) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[identifier, "settings", setting_type.as_str()])?;
        let params = Params::new().with("device_id", device_id);
        self.endpoint.session().delete(url, Some(&params)).await?;
        Ok(())
    }

    /// Assign calling plans.
    ///
    /// `payload` is a list of plans, each with an integer `type` and an
    /// optional `billing_account_id` (only needed for Indian plans).
    #[tracing::instrument(skip(self, payload))]
    pub async fn assign_calling_plan(&self, identifier: &str, payload: &Value) -> Result<JsonObject> {
        let url = self.endpoint.url_for(&[identifier, "calling_plans"])?;
        let response = self.endpoint.session().post(url, payload).await?;
        decode(response).await
    }

    /// Unassign a calling plan. Accepts `billing_account_id` in `params`.
    #[tracing::instrument(skip(self))]
    pub async fn unassign_calling_plan(
        &self,
        identifier: &str,
        calling_plan_type: &str,
        params: Params,
    ) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[identifier, "calling_plans", calling_plan_type])?;
        self.endpoint.session().delete(url, Some(&params)).await?;
        Ok(())
    }

    /// Assign phone numbers, e.g.
    /// `{"phone_numbers": [{"number": "+12243416415", "id": "TqH98ec8RVCu6Z00aBv9ow"}]}`.
    #[tracing::instrument(skip(self, payload))]
    pub async fn assign_phone_numbers(&self, identifier: &str, payload: &Value) -> Result<JsonObject> {
        let url = self.endpoint.url_for(&[identifier, "phone_numbers"])?;
        let response = self.endpoint.session().post(url, payload).await?;
        decode(response).await
    }

    /// Unassign a phone number, given as the number itself or its ID.
    #[tracing::instrument(skip(self))]
    pub async fn unassign_phone_number(&self, identifier: &str, phone_number_id: &str) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[identifier, "phone_numbers", phone_number_id])?;
        self.endpoint.session().delete(url, None).await?;
        Ok(())
    }

    /// Update outbound calling restrictions by country or region.
    #[tracing::instrument(skip(self, payload))]
    pub async fn block_outbound_calling(&self, identifier: &str, payload: &Value) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[identifier, "outbound_calling", "countries_regions"])?;
        self.endpoint.session().patch(url, payload).await?;
        Ok(())
    }
}

impl Resource for PhoneCommonAreas {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl Get for PhoneCommonAreas {}

impl List for PhoneCommonAreas {
    const ITEMS_KEY: &'static str = "common_areas";
}

impl Create for PhoneCommonAreas {}

impl Update for PhoneCommonAreas {}

impl Delete for PhoneCommonAreas {}
