//! Account endpoints: signup, login, finalize, user lookup.

use anang_core::entities::{AccountSummary, User};
use serde::{Deserialize, Serialize};

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError};

const SIGNUP: Messages = Messages {
    fallback: "Sign up failed",
    by_status: &[(409, "Email already registered"), (400, "Invalid request")],
};

const LOGIN: Messages = Messages {
    fallback: "Login failed",
    by_status: &[(401, "Invalid credentials")],
};

const FINALIZE: Messages = Messages {
    fallback: "Failed to create account",
    by_status: &[
        (400, "Please submit your business details first."),
        (409, "Account already exists. Please log in."),
    ],
};

const GET_USER: Messages = Messages {
    fallback: "Failed to load user",
    by_status: &[],
};

/// Email + password body shared by signup, login and finalize.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    /// Email is trimmed; the password is sent as typed.
    #[must_use]
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self {
            email: email.trim(),
            password,
        }
    }
}

/// Successful login: the user plus an opaque session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    /// The flat account record, when the backend sent one.
    pub account: Option<AccountSummary>,
}

/// Prefix of the token synthesized for backends that return no token.
pub const SYNTHETIC_TOKEN_PREFIX: &str = "session:";

#[derive(Deserialize)]
#[serde(untagged)]
enum LoginPayload {
    Envelope { user: User, token: String },
    Flat(AccountSummary),
}

/// A session needs both a user email and a token; anything less would be
/// dropped again when the stored session is read back.
impl TryFrom<LoginPayload> for LoginResponse {
    type Error = ApiError;

    fn try_from(payload: LoginPayload) -> Result<Self, Self::Error> {
        let login = match payload {
            LoginPayload::Envelope { user, token } => Self {
                user,
                token,
                account: None,
            },
            LoginPayload::Flat(account) => Self {
                user: User::from_account(&account),
                token: format!("{SYNTHETIC_TOKEN_PREFIX}{}", account.email.trim()),
                account: Some(account),
            },
        };
        if login.user.email.trim().is_empty() {
            return Err(ApiError::Decode("login response has no user email".into()));
        }
        if login.token.trim().is_empty() {
            return Err(ApiError::Decode("login response has no session token".into()));
        }
        Ok(login)
    }
}

impl ApiClient {
    /// Create an account with email and password.
    ///
    /// # Errors
    ///
    /// [`ApiError::Conflict`] when the email is registered,
    /// [`ApiError::Precondition`] for invalid input.
    pub async fn signup(&self, email: &str, password: &str) -> Result<AccountSummary, ApiError> {
        let url = self.url("/api/signup");
        tracing::debug!(%url, "POST signup");
        let resp = http::send(self.http.post(&url).json(&Credentials::new(email, password))).await?;
        http::json(resp, &SIGNUP).await
    }

    /// Authenticate. Accepts both the `{user, token}` envelope and the flat
    /// account record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] on invalid credentials, [`ApiError::Network`] when
    /// the server is unreachable.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.url("/api/login");
        tracing::debug!(%url, "POST login");
        let resp = http::send(self.http.post(&url).json(&Credentials::new(email, password))).await?;
        let payload: LoginPayload = http::json(resp, &LOGIN).await?;
        LoginResponse::try_from(payload)
    }

    /// Create the login for an already-submitted application.
    ///
    /// # Errors
    ///
    /// [`ApiError::Precondition`] when no application exists,
    /// [`ApiError::Conflict`] when the account exists.
    pub async fn finalize_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountSummary, ApiError> {
        let url = self.url("/api/finalize-account");
        tracing::debug!(%url, "POST finalize-account");
        let resp = http::send(self.http.post(&url).json(&Credentials::new(email, password))).await?;
        http::json(resp, &FINALIZE).await
    }

    /// Progress and review status for a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success status.
    pub async fn get_user(&self, email: &str) -> Result<AccountSummary, ApiError> {
        let url = format!(
            "{}?email={}",
            self.url("/api/user"),
            urlencoding::encode(email)
        );
        tracing::debug!(%url, "GET user");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &GET_USER).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anang_core::enums::ApprovalStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_payload_keeps_token() {
        let payload: LoginPayload = serde_json::from_str(
            r#"{"user":{"id":"u1","email":"a@b.ca","name":"a"},"token":"tok_1"}"#,
        )
        .unwrap();
        let login = LoginResponse::try_from(payload).unwrap();
        assert_eq!(login.token, "tok_1");
        assert_eq!(login.user.id, "u1");
        assert!(login.account.is_none());
    }

    #[test]
    fn flat_payload_synthesizes_token() {
        let payload: LoginPayload = serde_json::from_str(
            r#"{"email":"sage@cafe.ca","business_name":"Sage Café","name":"","progress":3,"status":"pending_review","is_verified":false}"#,
        )
        .unwrap();
        let login = LoginResponse::try_from(payload).unwrap();
        assert_eq!(login.token, "session:sage@cafe.ca");
        assert_eq!(login.user.id, "sage@cafe.ca");
        assert_eq!(login.user.name, "sage");
        assert_eq!(login.user.status, Some(ApprovalStatus::PendingReview));
        assert_eq!(login.user.business_name.as_deref(), Some("Sage Café"));
    }

    #[test]
    fn envelope_without_token_or_email_is_rejected() {
        for body in [
            r#"{"user":{"id":"","email":"","name":""},"token":""}"#,
            r#"{"user":{"id":"u1","email":"a@b.ca","name":"a"},"token":"  "}"#,
            r#"{"user":{"id":"u1","email":"","name":"a"},"token":"tok_1"}"#,
        ] {
            let payload: LoginPayload = serde_json::from_str(body).unwrap();
            let err = LoginResponse::try_from(payload).unwrap_err();
            assert!(matches!(err, ApiError::Decode(_)), "{body}");
        }
    }

    #[test]
    fn credentials_trim_email_only() {
        let creds = Credentials::new("  a@b.ca ", " pw ");
        assert_eq!(creds.email, "a@b.ca");
        assert_eq!(creds.password, " pw ");
    }
}
