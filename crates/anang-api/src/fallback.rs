//! Bundled business listing used when the live endpoint is unavailable.
//!
//! The dataset groups entries by a lowercase list name; each list maps to
//! the category label the live endpoint uses.

use std::collections::HashMap;

use anang_core::entities::{Business, BusinessList};
use serde::Deserialize;

const SERVICES_JSON: &str = include_str!("../data/services.json");

#[derive(Deserialize)]
struct Dataset {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(flatten)]
    lists: HashMap<String, Vec<ServiceEntry>>,
}

#[derive(Deserialize)]
struct ServiceEntry {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    sustainability: String,
    #[serde(default)]
    live: bool,
}

/// Category label for a dataset list name. Unknown names pass through.
#[must_use]
pub fn map_category(list: &str) -> String {
    match list {
        "restaurants" => "Restaurant",
        "places" => "Places",
        "activities" => "Market",
        "artifacts" => "Other",
        other => other,
    }
    .to_string()
}

/// Every bundled business, in dataset order.
#[must_use]
pub fn all_businesses() -> Vec<Business> {
    let dataset: Dataset = match serde_json::from_str(SERVICES_JSON) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!(error = %e, "bundled business dataset is malformed");
            return Vec::new();
        }
    };
    let mut lists = dataset.lists;
    dataset
        .categories
        .iter()
        .flat_map(|list| {
            let category = map_category(list);
            lists
                .remove(list)
                .unwrap_or_default()
                .into_iter()
                .map(move |entry| Business {
                    id: entry.id,
                    name: entry.name,
                    description: entry.description,
                    category: category.clone(),
                    address: entry.address,
                    sustainability: entry.sustainability,
                    live: entry.live,
                })
        })
        .collect()
}

/// Fallback listing, filtered case-insensitively by mapped category.
#[must_use]
pub fn businesses(category: Option<&str>) -> BusinessList {
    let mut businesses = all_businesses();
    if let Some(category) = category {
        businesses.retain(|b| b.category.eq_ignore_ascii_case(category));
    }
    BusinessList {
        businesses,
        from_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dataset_parses_and_maps_categories() {
        let all = all_businesses();
        assert!(!all.is_empty());
        let categories: Vec<&str> = all.iter().map(|b| b.category.as_str()).collect();
        assert!(categories.contains(&"Restaurant"));
        assert!(categories.contains(&"Market"));
        assert!(!categories.contains(&"restaurants"));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let list = businesses(Some("restaurant"));
        assert!(list.from_fallback);
        assert!(!list.businesses.is_empty());
        assert!(list.businesses.iter().all(|b| b.category == "Restaurant"));
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        assert!(businesses(Some("Spaceport")).businesses.is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let pump = all_businesses()
            .into_iter()
            .find(|b| b.id == "pump_house")
            .unwrap();
        assert_eq!(pump.sustainability, "");
        assert_eq!(pump.category, "Places");
    }
}
