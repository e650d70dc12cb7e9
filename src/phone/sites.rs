//! Phone sites endpoint.

use serde_json::Value;

use crate::endpoint::{decode, Endpoint};
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::Params;
use crate::phone::SiteSettingType;
use crate::session::SharedSession;
use crate::traits::{Create, Delete, Get, List, Resource, Update};
use crate::JsonObject;

/// Zoom Phone sites (`phone/sites`).
#[derive(Debug, Clone)]
pub struct PhoneSites {
    endpoint: Endpoint,
}

impl PhoneSites {
    pub const URI: &'static str = "phone/sites";

    pub fn new(session: SharedSession) -> Self {
        Self {
            endpoint: Endpoint::new(session, Self::URI),
        }
    }

    /// Site settings, or a single setting type when `setting_type` is given.
    #[tracing::instrument(skip(self))]
    pub async fn get_settings(
        &self,
        site_id: &str,
        setting_type: Option<SiteSettingType>,
    ) -> Result<JsonObject> {
        let url = match setting_type {
            Some(t) => self.endpoint.url_for(&[site_id, "settings", t.as_str()])?,
            None => self.endpoint.url_for(&[site_id, "settings"])?,
        };
        self.endpoint.get_json(url, None).await
    }

    /// Add a setting. Only `holiday_hours` and `security` can be added.
    #[tracing::instrument(skip(self, payload))]
    pub async fn add_settings(
        &self,
        site_id: &str,
        setting_type: SiteSettingType,
        payload: &Value,
    ) -> Result<JsonObject> {
        let url = self.endpoint.url_for(&[site_id, "settings", setting_type.as_str()])?;
        let response = self.endpoint.session().post(url, payload).await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_settings(
        &self,
        site_id: &str,
        setting_type: SiteSettingType,
        payload: &Value,
    ) -> Result<()> {
        let url = self.endpoint.url_for(&[site_id, "settings", setting_type.as_str()])?;
        self.endpoint.session().patch(url, payload).await?;
        Ok(())
    }

    /// Remove a holiday-hours entry (by holiday ID) or a security setting
    /// (by device type).
    #[tracing::instrument(skip(self))]
    pub async fn delete_settings(
        &self,
        site_id: &str,
        setting_type: SiteSettingType,
        setting_value: &str,
    ) -> Result<()> {
        let url = self.endpoint.url_for(&[site_id, "settings", setting_type.as_str()])?;
        let params = Params::new().with(setting_type.delete_param(), setting_value);
        self.endpoint.session().delete(url, Some(&params)).await?;
        Ok(())
    }

    /// Customized outbound caller ID numbers of a site.
    #[tracing::instrument(skip(self, params))]
    pub fn list_caller_id(&self, site_id: &str, params: Params) -> ItemStream<JsonObject> {
        self.endpoint.paged_get_at(
            &[site_id, "outbound_caller_id", "customized_numbers"],
            "customize_numbers",
            params,
        )
    }

    /// Add customized caller ID numbers, e.g.
    /// `{"phone_number_ids": ["55JUZPwERHuGttd_j4qBsQ"]}`.
    #[tracing::instrument(skip(self, payload))]
    pub async fn add_caller_id(&self, site_id: &str, payload: &Value) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[site_id, "outbound_caller_id", "customized_numbers"])?;
        self.endpoint.session().post(url, payload).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_caller_id(&self, site_id: &str, phone_number_ids: &[&str]) -> Result<()> {
        let url = self
            .endpoint
            .url_for(&[site_id, "outbound_caller_id", "customized_numbers"])?;
        let params = Params::new().with_list("customize_ids", phone_number_ids);
        self.endpoint.session().delete(url, Some(&params)).await?;
        Ok(())
    }
}

impl Resource for PhoneSites {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl Get for PhoneSites {}

impl List for PhoneSites {
    const ITEMS_KEY: &'static str = "sites";
}

impl Create for PhoneSites {}

impl Update for PhoneSites {}

impl Delete for PhoneSites {}
