use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CategoryType, leaf_count};

/// One discovery tab, backed by a data file on the server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiscoveryCategory {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: CategoryType,
    #[serde(default)]
    pub file: String,
}

/// Response of `GET /api/discovery/categories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<DiscoveryCategory>,
}

/// A listed business, place, or event. Which fields are set depends on the
/// category type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiscoveryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_sourcing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veg_vegan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub washrooms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl DiscoveryEntry {
    /// Green Plate leaf count (0 = no indicator).
    #[must_use]
    pub fn certification_leaves(&self) -> u8 {
        leaf_count(self.certification.as_deref())
    }

    /// Description text: `about`, falling back to `notes`.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.about
            .as_deref()
            .or(self.notes.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Response of `GET /api/discovery/data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntryList {
    #[serde(default)]
    pub entries: Vec<DiscoveryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryType>,
}

/// A verified partner business.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Business {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub sustainability: String,
    #[serde(default)]
    pub live: bool,
}

/// Business listing, live or from the bundled fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BusinessList {
    #[serde(default)]
    pub businesses: Vec<Business>,
    /// Set when the listing came from the bundled dataset and may be stale.
    #[serde(default)]
    pub from_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_food_entry_with_certification() {
        let entry: DiscoveryEntry = serde_json::from_str(
            r#"{"name":"Sage Café","location":"1 King St","certification":"Silver","veg_vegan":"Yes"}"#,
        )
        .unwrap();
        assert_eq!(entry.certification_leaves(), 2);
        assert_eq!(entry.veg_vegan.as_deref(), Some("Yes"));
    }

    #[test]
    fn null_certification_has_no_leaves() {
        let entry: DiscoveryEntry =
            serde_json::from_str(r#"{"name":"Fort Henry","certification":"null"}"#).unwrap();
        assert_eq!(entry.certification_leaves(), 0);
    }

    #[test]
    fn description_prefers_about_over_notes() {
        let entry = DiscoveryEntry {
            name: "Pump House".into(),
            about: Some("Steam museum".into()),
            notes: Some("Closed Mondays".into()),
            ..DiscoveryEntry::default()
        };
        assert_eq!(entry.description(), Some("Steam museum"));
    }

    #[test]
    fn category_type_reads_wire_field() {
        let list: CategoryList = serde_json::from_str(
            r#"{"categories":[{"id":"kingston_events","label":"Kingston Events","type":"events","file":"kingston_events.txt"}]}"#,
        )
        .unwrap();
        assert_eq!(list.categories[0].kind, CategoryType::Events);
    }
}
