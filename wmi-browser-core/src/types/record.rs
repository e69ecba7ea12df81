//! WMI record type definitions

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One World Manufacturer Identifier registration entry.
///
/// Field names on the wire are `PascalCase` (`Id`, `Name`, ..., `WMI`).
/// Timestamps stay as text: they are compared lexicographically and are
/// never parsed as dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WmiRecord {
    /// Record ID (the endpoint may serve it as a number)
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    /// Manufacturer name
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Country of registration
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: String,
    /// Vehicle type
    #[serde(default, deserialize_with = "lenient_text")]
    pub vehicle_type: String,
    /// The WMI code itself
    #[serde(rename = "WMI", default, deserialize_with = "lenient_text")]
    pub wmi: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_available_to_public: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_on: String,
    /// `None` when the field is missing, `null` or empty
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub updated_on: Option<String>,
}

impl WmiRecord {
    /// The eight searchable fields, in search (and column) order.
    ///
    /// An absent `updated_on` yields the empty string.
    pub fn search_fields(&self) -> [&str; 8] {
        [
            &self.id,
            &self.name,
            &self.country,
            &self.vehicle_type,
            &self.wmi,
            &self.date_available_to_public,
            &self.created_on,
            self.updated_on.as_deref().unwrap_or_default(),
        ]
    }
}

/// Textual form of a JSON scalar; `null` becomes empty.
fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = value_to_text(Value::deserialize(deserializer)?);
    Ok(if text.is_empty() { None } else { Some(text) })
}
