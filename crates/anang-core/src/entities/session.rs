use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AccountSummary;
use crate::enums::ApprovalStatus;

/// The signed-in user as the session store sees it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

impl User {
    /// Build a user from the flat account record some endpoints return.
    ///
    /// The account record carries no id, so the email doubles as one.
    #[must_use]
    pub fn from_account(account: &AccountSummary) -> Self {
        Self {
            id: account.email.clone(),
            email: account.email.clone(),
            name: account.display_name(),
            status: account.status,
            business_name: account.business_name.clone(),
        }
    }
}

/// Current authentication state.
///
/// A user and a token are either both present or both absent; the enum makes
/// the half-set state unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user: User, token: String },
}

impl Session {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Anonymous => None,
        }
    }

    /// Convert a persisted record. Partial records (user without token or the
    /// reverse, or an empty token) are treated as anonymous.
    #[must_use]
    pub fn from_record(record: SessionRecord) -> Self {
        match (record.user, record.token) {
            (Some(user), Some(token)) if !token.is_empty() && !user.email.is_empty() => {
                Self::Authenticated { user, token }
            }
            _ => Self::Anonymous,
        }
    }

    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        match self {
            Self::Authenticated { user, token } => SessionRecord {
                user: Some(user.clone()),
                token: Some(token.clone()),
            },
            Self::Anonymous => SessionRecord::default(),
        }
    }
}

/// Wire/storage shape of a session: `{user, token}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionRecord {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}
