use anang_core::entities::{Business, ChatMessage, DiscoveryEntry, PartnerProfile, SessionRecord};
use anang_core::roadmap::RoadmapStep;
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

pub const SCHEMA_TYPES: [&str; 6] = [
    "session",
    "profile",
    "discovery-entry",
    "business",
    "chat-message",
    "roadmap-step",
];

/// Handle `anang schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for_name(&args.type_name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema type '{}'; expected one of {}",
            args.type_name,
            SCHEMA_TYPES.join(", ")
        )
    })?;
    output(&schema, flags.format)
}

fn schema_for_name(name: &str) -> Option<Schema> {
    Some(match name {
        "session" => schema_for!(SessionRecord),
        "profile" => schema_for!(PartnerProfile),
        "discovery-entry" => schema_for!(DiscoveryEntry),
        "business" => schema_for!(Business),
        "chat-message" => schema_for!(ChatMessage),
        "roadmap-step" => schema_for!(RoadmapStep),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in SCHEMA_TYPES {
            let schema = schema_for_name(name).unwrap();
            let value = serde_json::to_value(&schema).unwrap();
            assert!(value.get("properties").is_some(), "{name} has no properties");
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(schema_for_name("invoice").is_none());
    }
}
