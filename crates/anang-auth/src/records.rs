//! Reading and writing the persisted session records.
//!
//! `kingston_auth` holds `{user, token}`. `kingston_user` holds the legacy
//! flat user record and only counts when it carries an email.

use anang_core::entities::{AccountSummary, Session, SessionRecord};

use crate::error::AuthError;
use crate::storage::SessionStorage;

/// Key of the `{user, token}` session record.
pub const AUTH_KEY: &str = "kingston_auth";

/// Key of the legacy flat user record.
pub const USER_KEY: &str = "kingston_user";

/// Read the stored session. Missing, malformed, or partial records are
/// anonymous.
#[must_use]
pub fn load_session(storage: &dyn SessionStorage) -> Session {
    let raw = match storage.load(AUTH_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Session::Anonymous,
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored session");
            return Session::Anonymous;
        }
    };
    match serde_json::from_str::<SessionRecord>(&raw) {
        Ok(record) => Session::from_record(record),
        Err(e) => {
            tracing::warn!(error = %e, "stored session is malformed, ignoring it");
            Session::Anonymous
        }
    }
}

/// Persist `session`, or clear the record when anonymous.
///
/// # Errors
///
/// Returns [`AuthError::Storage`] if the backend fails.
pub fn save_session(storage: &dyn SessionStorage, session: &Session) -> Result<(), AuthError> {
    if session.is_authenticated() {
        let json = serde_json::to_string(&session.to_record())
            .map_err(|e| AuthError::Storage(format!("encode session: {e}")))?;
        storage.store(AUTH_KEY, &json)
    } else {
        storage.remove(AUTH_KEY)
    }
}

/// Read the legacy user record. Records without an email are ignored.
#[must_use]
pub fn load_stored_user(storage: &dyn SessionStorage) -> Option<AccountSummary> {
    let raw = storage.load(USER_KEY).ok().flatten()?;
    serde_json::from_str::<AccountSummary>(&raw)
        .ok()
        .filter(|account| !account.email.trim().is_empty())
}

/// Write the legacy user record, or remove it with `None`.
///
/// # Errors
///
/// Returns [`AuthError::Storage`] if the backend fails.
pub fn save_stored_user(
    storage: &dyn SessionStorage,
    account: Option<&AccountSummary>,
) -> Result<(), AuthError> {
    match account {
        Some(account) => {
            let json = serde_json::to_string(account)
                .map_err(|e| AuthError::Storage(format!("encode user: {e}")))?;
            storage.store(USER_KEY, &json)
        }
        None => storage.remove(USER_KEY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use anang_core::entities::User;
    use pretty_assertions::assert_eq;

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "a@b.ca".into(),
            name: "a".into(),
            status: None,
            business_name: None,
        }
    }

    #[test]
    fn round_trips_authenticated_session() {
        let storage = MemoryStorage::new();
        let session = Session::Authenticated {
            user: user(),
            token: "tok".into(),
        };
        save_session(&storage, &session).unwrap();
        assert_eq!(load_session(&storage), session);
    }

    #[test]
    fn malformed_record_is_anonymous() {
        let storage = MemoryStorage::new();
        storage.store(AUTH_KEY, "{not json").unwrap();
        assert_eq!(load_session(&storage), Session::Anonymous);
    }

    #[test]
    fn user_without_token_is_anonymous() {
        let storage = MemoryStorage::new();
        storage
            .store(AUTH_KEY, &serde_json::json!({ "user": user(), "token": null }).to_string())
            .unwrap();
        assert_eq!(load_session(&storage), Session::Anonymous);
    }

    #[test]
    fn saving_anonymous_clears_record() {
        let storage = MemoryStorage::new();
        storage.store(AUTH_KEY, "{}").unwrap();
        save_session(&storage, &Session::Anonymous).unwrap();
        assert!(storage.load(AUTH_KEY).unwrap().is_none());
    }

    #[test]
    fn stored_user_requires_email() {
        let storage = MemoryStorage::new();
        storage.store(USER_KEY, r#"{"email":"","name":"x"}"#).unwrap();
        assert!(load_stored_user(&storage).is_none());
        storage.store(USER_KEY, r#"{"email":"a@b.ca"}"#).unwrap();
        assert_eq!(load_stored_user(&storage).unwrap().email, "a@b.ca");
    }
}
