//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output and
//! [`ResourceRow`] for table listings, as alternatives to JSON.

use serde_json::Value;
use tabled::Tabled;

use crate::JsonObject;

/// Trait for human-readable key-value output.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for JsonObject {
    fn pretty_print(&self) -> String {
        let title = text(self, "name")
            .or_else(|| text(self, "display_name"))
            .or_else(|| text(self, "id"))
            .unwrap_or_else(|| "(unnamed)".to_string());
        let width = self.keys().map(String::len).max().unwrap_or(0).max(12);
        let divider = "─".repeat(title.len().max(30));

        let mut lines = vec![title, divider];
        for (key, value) in self {
            lines.push(format!("{:<width$}  {}", format!("{key}:"), render(value), width = width + 1));
        }
        lines.join("\n")
    }
}

/// One table row per listed entity.
#[derive(Debug, Tabled)]
pub struct ResourceRow {
    pub id: String,
    pub name: String,
    /// Site code, MAC address or extension, whichever the entity has.
    pub detail: String,
}

impl From<&JsonObject> for ResourceRow {
    fn from(item: &JsonObject) -> Self {
        Self {
            id: text(item, "id").unwrap_or_default(),
            name: text(item, "name")
                .or_else(|| text(item, "display_name"))
                .unwrap_or_default(),
            detail: ["site_code", "mac_address", "extension_number"]
                .iter()
                .find_map(|key| text(item, key))
                .unwrap_or_default(),
        }
    }
}

fn text(item: &JsonObject, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_pretty_print_uses_name_as_title() {
        let site = object(json!({"id": "s1", "name": "Main Office", "site_code": 100}));
        let output = site.pretty_print();
        assert!(output.starts_with("Main Office\n"));
        assert!(output.contains("site_code:"));
        assert!(output.contains("100"));
    }

    #[test]
    fn test_row_detail_fallbacks() {
        let device = object(json!({"id": "d1", "display_name": "Lobby", "mac_address": "aa:bb"}));
        let row = ResourceRow::from(&device);
        assert_eq!(row.name, "Lobby");
        assert_eq!(row.detail, "aa:bb");

        let area = object(json!({"id": "c1", "name": "Kitchen", "extension_number": 1001}));
        assert_eq!(ResourceRow::from(&area).detail, "1001");
    }
}
