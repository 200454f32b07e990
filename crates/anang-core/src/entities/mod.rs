//! Entity structs for the portal domain.

mod account;
mod chat;
mod discovery;
mod profile;
mod session;

pub use account::AccountSummary;
pub use chat::ChatMessage;
pub use discovery::{Business, BusinessList, CategoryList, DiscoveryCategory, DiscoveryEntry, EntryList};
pub use profile::{AuthRecord, BusinessRecord, PartnerProfile};
pub use session::{Session, SessionRecord, User};

/// Deserialize a string field where the backend uses `""` for "not set".
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
