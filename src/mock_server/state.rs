//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Zoom Phone API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::JsonObject;

/// Resource collections served under `/phone/<collection>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Sites,
    Devices,
    CommonAreas,
}

impl Collection {
    /// Parse the path segment after `/phone/`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "sites" => Some(Self::Sites),
            "devices" => Some(Self::Devices),
            "common_areas" => Some(Self::CommonAreas),
            _ => None,
        }
    }

    /// Key holding the items in list responses.
    pub fn items_key(self) -> &'static str {
        match self {
            Self::Sites => "sites",
            Self::Devices => "devices",
            Self::CommonAreas => "common_areas",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Self::Sites => "site_",
            Self::Devices => "dev_",
            Self::CommonAreas => "ca_",
        }
    }
}

/// Shared state for the mock server.
///
/// Records are kept in ID order so pages are stable between requests.
/// Wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    records: HashMap<Collection, BTreeMap<String, JsonObject>>,

    /// Settings bodies indexed by collection and record ID.
    pub settings: HashMap<(Collection, String), JsonObject>,

    /// Device IDs that received a reboot request, in order.
    pub reboots: Vec<String>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a record to a collection.
    pub fn with_record(mut self, collection: Collection, record: JsonObject) -> Self {
        self.insert(collection, record);
        self
    }

    /// Add settings for a record.
    pub fn with_settings(mut self, collection: Collection, id: &str, settings: JsonObject) -> Self {
        self.settings.insert((collection, id.to_string()), settings);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Insert a record, assigning an `id` when it has none. Returns the ID.
    pub fn insert(&mut self, collection: Collection, mut record: JsonObject) -> String {
        let id = match record.get("id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                self.next_id += 1;
                let id = format!("{}{}", collection.id_prefix(), self.next_id);
                record.insert("id".to_string(), Value::String(id.clone()));
                id
            }
        };
        self.records
            .entry(collection)
            .or_default()
            .insert(id.clone(), record);
        id
    }

    /// Get a record by ID.
    pub fn get(&self, collection: Collection, id: &str) -> Option<&JsonObject> {
        self.records.get(&collection)?.get(id)
    }

    /// Number of records in a collection.
    pub fn count(&self, collection: Collection) -> usize {
        self.records.get(&collection).map_or(0, BTreeMap::len)
    }

    /// One page of records starting at `token` (an ID), plus the ID that
    /// starts the next page.
    pub fn page(
        &self,
        collection: Collection,
        page_size: usize,
        token: Option<&str>,
    ) -> (Vec<JsonObject>, Option<String>) {
        let Some(records) = self.records.get(&collection) else {
            return (Vec::new(), None);
        };

        let mut remaining = records
            .iter()
            .filter(|(id, _)| token.map_or(true, |t| id.as_str() >= t));

        let items: Vec<JsonObject> = remaining
            .by_ref()
            .take(page_size.max(1))
            .map(|(_, record)| record.clone())
            .collect();
        let next = remaining.next().map(|(id, _)| id.clone());

        (items, next)
    }

    /// Merge `patch` into a record. Returns false if the record is missing.
    pub fn update(&mut self, collection: Collection, id: &str, patch: JsonObject) -> bool {
        let Some(record) = self
            .records
            .get_mut(&collection)
            .and_then(|records| records.get_mut(id))
        else {
            return false;
        };
        for (key, value) in patch {
            if key != "id" {
                record.insert(key, value);
            }
        }
        true
    }

    /// Remove a record. Returns false if it was missing.
    pub fn remove(&mut self, collection: Collection, id: &str) -> bool {
        self.records
            .get_mut(&collection)
            .and_then(|records| records.remove(id))
            .is_some()
    }
}
