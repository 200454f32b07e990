use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::ApprovalStatus;
use crate::{MAX_PROGRESS, MIN_PROGRESS};

const fn default_progress() -> u8 {
    MIN_PROGRESS
}

/// Clamp whatever integer the backend sends into `1..=7`.
fn clamp_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<i64> = Option::deserialize(deserializer)?;
    let clamped = raw
        .unwrap_or(i64::from(MIN_PROGRESS))
        .clamp(i64::from(MIN_PROGRESS), i64::from(MAX_PROGRESS));
    Ok(u8::try_from(clamped).unwrap_or(MIN_PROGRESS))
}

/// Authentication half of the dashboard record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthRecord {
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub email: Option<String>,
    #[serde(default = "default_progress", deserialize_with = "clamp_progress")]
    pub progress: u8,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
}

impl Default for AuthRecord {
    fn default() -> Self {
        Self {
            email: None,
            progress: MIN_PROGRESS,
            is_verified: false,
            status: None,
        }
    }
}

/// Business-application half of the dashboard record.
///
/// The backend sends empty strings for missing values; those deserialize to
/// `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BusinessRecord {
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub biz_name: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub biz_cat: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub biz_desc: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub license_url: Option<String>,
}

/// Joined auth + business record from `GET /api/dashboard-data/{email}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PartnerProfile {
    #[serde(default)]
    pub auth: AuthRecord,
    #[serde(default)]
    pub business: BusinessRecord,
}

impl PartnerProfile {
    /// Whether a business application exists for this account.
    #[must_use]
    pub const fn has_application(&self) -> bool {
        self.business.biz_name.is_some()
            || self.business.biz_cat.is_some()
            || self.business.status.is_some()
    }

    /// An application exists but no license has been uploaded or verified.
    #[must_use]
    pub const fn needs_license(&self) -> bool {
        self.has_application() && self.business.license_url.is_none() && !self.auth.is_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_into_range() {
        let high: AuthRecord = serde_json::from_str(r#"{"progress": 42}"#).unwrap();
        assert_eq!(high.progress, 7);
        let low: AuthRecord = serde_json::from_str(r#"{"progress": -3}"#).unwrap();
        assert_eq!(low.progress, 1);
        let missing: AuthRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.progress, 1);
    }

    #[test]
    fn empty_business_strings_mean_no_application() {
        let profile: PartnerProfile = serde_json::from_str(
            r#"{"auth":{"progress":1},"business":{"biz_name":"","biz_cat":"","biz_desc":"","license_url":"","status":""}}"#,
        )
        .unwrap();
        assert!(!profile.has_application());
        assert!(!profile.needs_license());
    }

    #[test]
    fn application_without_license_needs_one() {
        let profile: PartnerProfile = serde_json::from_str(
            r#"{"auth":{"progress":2,"is_verified":false},"business":{"biz_name":"Sage","status":"pending"}}"#,
        )
        .unwrap();
        assert!(profile.has_application());
        assert!(profile.needs_license());
    }

    #[test]
    fn verified_account_does_not_need_license() {
        let profile: PartnerProfile = serde_json::from_str(
            r#"{"auth":{"progress":7,"is_verified":true},"business":{"biz_cat":"Cafe"}}"#,
        )
        .unwrap();
        assert!(!profile.needs_license());
    }
}
