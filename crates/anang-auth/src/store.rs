//! The session store: the single owner of the current [`Session`].

use std::sync::Arc;

use anang_api::ApiClient;
use anang_core::entities::{AccountSummary, Session, User};
use tokio::sync::watch;

use crate::error::AuthError;
use crate::records;
use crate::storage::SessionStorage;

/// Holds the current session, persists it, and broadcasts changes.
///
/// The session is only ever replaced as a whole, by [`Self::login`],
/// [`Self::signup`] or [`Self::logout`].
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<dyn SessionStorage>,
    state: watch::Sender<Session>,
}

impl SessionStore {
    /// Create a store, hydrating from durable storage.
    #[must_use]
    pub fn new(api: ApiClient, storage: Arc<dyn SessionStorage>) -> Self {
        let initial = records::load_session(storage.as_ref());
        tracing::debug!(authenticated = initial.is_authenticated(), "session hydrated");
        let (state, _) = watch::channel(initial);
        Self {
            api,
            storage,
            state,
        }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// The signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when anonymous.
    pub fn require_user(&self) -> Result<User, AuthError> {
        self.state
            .borrow()
            .user()
            .cloned()
            .ok_or(AuthError::NotAuthenticated)
    }

    /// Receiver that observes every session replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Authenticate and replace the session.
    ///
    /// On failure the current session is left untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] for empty input (nothing is sent), or the
    /// wrapped [`anang_api::ApiError`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required.".into(),
            ));
        }
        let login = self.api.login(email, password).await?;
        let account = login
            .account
            .unwrap_or_else(|| account_from_user(&login.user));
        let session = Session::Authenticated {
            user: login.user,
            token: login.token,
        };
        self.persist(&session, Some(&account));
        self.state.send_replace(session.clone());
        tracing::debug!(email, "signed in");
        Ok(session)
    }

    /// Create an account, then sign in with the same credentials.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] for empty input, or the wrapped
    /// [`anang_api::ApiError`] from either call.
    pub async fn signup(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required.".into(),
            ));
        }
        self.api.signup(email, password).await?;
        self.login(email, password).await
    }

    /// Drop the session and clear durable storage.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the stored records cannot be
    /// removed. The in-memory session is anonymous either way.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.state.send_replace(Session::Anonymous);
        records::save_session(self.storage.as_ref(), &Session::Anonymous)?;
        records::save_stored_user(self.storage.as_ref(), None)?;
        tracing::debug!("signed out");
        Ok(())
    }

    fn persist(&self, session: &Session, account: Option<&AccountSummary>) {
        if let Err(e) = records::save_session(self.storage.as_ref(), session) {
            tracing::warn!(error = %e, "session is active but could not be persisted");
        }
        if let Err(e) = records::save_stored_user(self.storage.as_ref(), account) {
            tracing::warn!(error = %e, "could not persist user record");
        }
    }
}

fn account_from_user(user: &User) -> AccountSummary {
    AccountSummary {
        email: user.email.clone(),
        name: Some(user.name.clone()).filter(|n| !n.is_empty()),
        business_name: user.business_name.clone(),
        progress: None,
        status: user.status,
        is_verified: false,
    }
}
