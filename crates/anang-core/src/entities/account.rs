use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ApprovalStatus;

/// Flat account record returned by signup, login, finalize and user lookups.
///
/// Also the shape of the legacy stored-user record, where `email` is the only
/// required field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccountSummary {
    pub email: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub business_name: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub is_verified: bool,
}

impl AccountSummary {
    /// Name to show for the account: the stored name or the email's local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_local_part() {
        let account: AccountSummary =
            serde_json::from_str(r#"{"email":"sage@cafe.ca","name":""}"#).unwrap();
        assert_eq!(account.display_name(), "sage");
    }

    #[test]
    fn parses_backend_login_payload() {
        let account: AccountSummary = serde_json::from_str(
            r#"{"email":"a@b.ca","business_name":"Sage Café","name":"a","progress":3,"status":"pending_review","is_verified":false}"#,
        )
        .unwrap();
        assert_eq!(account.business_name.as_deref(), Some("Sage Café"));
        assert_eq!(account.progress, Some(3));
        assert_eq!(account.status, Some(ApprovalStatus::PendingReview));
    }
}
