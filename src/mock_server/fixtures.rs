//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::{json, Value};

use super::state::{Collection, MockState};
use crate::JsonObject;

/// Collection of fixture factories for test data.
pub struct Fixtures;

fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

impl Fixtures {
    /// A phone site.
    pub fn site(id: &str, name: &str) -> JsonObject {
        object(json!({
            "id": id,
            "name": name,
            "site_code": 100,
            "main_auto_receptionist": {"id": format!("ar_{id}"), "name": format!("{name} AR")},
            "country": {"code": "US", "name": "United States"}
        }))
    }

    /// A desk phone assigned to nobody.
    pub fn device(id: &str, display_name: &str, mac_address: &str) -> JsonObject {
        object(json!({
            "id": id,
            "display_name": display_name,
            "mac_address": mac_address,
            "device_type": "Poly",
            "status": "online",
            "provision_template_id": null
        }))
    }

    /// A common area phone.
    pub fn common_area(id: &str, name: &str, extension_number: u64) -> JsonObject {
        object(json!({
            "common_area_id": id,
            "id": id,
            "display_name": name,
            "extension_number": extension_number,
            "site": {"id": "site_main", "name": "Main Office"}
        }))
    }

    /// Holiday hours settings body.
    pub fn holiday_hours() -> JsonObject {
        object(json!({
            "holiday_hours": [
                {"id": "hol_1", "name": "New Year", "from": "2026-01-01T00:00:00Z", "to": "2026-01-02T00:00:00Z"}
            ]
        }))
    }

    /// The default scenario: one site, five devices (enough for several
    /// pages at small page sizes) and two common areas.
    pub fn default_state() -> MockState {
        let mut state = MockState::new()
            .with_record(Collection::Sites, Self::site("site_main", "Main Office"))
            .with_settings(Collection::Sites, "site_main", Self::holiday_hours());

        for n in 1..=5 {
            state = state.with_record(
                Collection::Devices,
                Self::device(
                    &format!("dev_{n:02}"),
                    &format!("Desk Phone {n}"),
                    &format!("64-16-7f-00-00-{n:02}"),
                ),
            );
        }

        state
            .with_record(Collection::CommonAreas, Self::common_area("ca_lobby", "Lobby", 1001))
            .with_record(
                Collection::CommonAreas,
                Self::common_area("ca_kitchen", "Kitchen", 1002),
            )
    }
}
