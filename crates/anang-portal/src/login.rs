//! Login page.

use anang_auth::SessionStore;

use crate::error::PortalError;
use crate::route::{Navigation, Route};
use crate::tasks::InFlight;

#[derive(Debug, Default)]
pub struct LoginPage {
    error: Option<String>,
    submitting: InFlight,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    /// Sign in and go home.
    ///
    /// # Errors
    ///
    /// Validation, busy, or backend errors; the message is kept in
    /// [`Self::error`] and the session is unchanged.
    pub async fn submit(
        &mut self,
        store: &SessionStore,
        email: &str,
        password: &str,
    ) -> Result<Navigation, PortalError> {
        self.error = None;
        let result = async {
            let _busy = self.submitting.start()?;
            store.login(email, password).await?;
            Ok::<_, PortalError>(Navigation::to(Route::Home))
        }
        .await;
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }
}
