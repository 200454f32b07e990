//! Success page: turn a submitted application into an account.

use anang_api::ApiClient;
use anang_auth::SessionStore;

use crate::error::PortalError;
use crate::route::{NavState, Navigation, Route};
use crate::tasks::InFlight;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug)]
pub struct SuccessPage {
    api: ApiClient,
    email: String,
    biz_name: Option<String>,
    error: Option<String>,
    submitting: InFlight,
}

impl SuccessPage {
    /// Open the page with the wizard's navigation state.
    ///
    /// # Errors
    ///
    /// Without an email the page cannot work; the returned navigation sends
    /// the user back to the wizard.
    pub fn open(api: ApiClient, state: Option<NavState>) -> Result<Self, Navigation> {
        match state {
            Some(state) if !state.email.trim().is_empty() => Ok(Self {
                api,
                email: state.email.trim().to_string(),
                biz_name: state.biz_name.filter(|n| !n.trim().is_empty()),
                error: None,
                submitting: InFlight::new(),
            }),
            _ => Err(Navigation::replace(Route::Partner)),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        self.biz_name
            .as_ref()
            .map_or_else(|| "Thanks!".to_string(), |name| format!("Thanks, {name}!"))
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    /// Create the account, sign in, and go to the dashboard.
    ///
    /// # Errors
    ///
    /// [`PortalError::Validation`] for mismatched or short passwords (checked
    /// before any request), [`PortalError::Busy`] during another submit, or
    /// the finalize/login error. The message is kept in [`Self::error`].
    pub async fn finalize(
        &mut self,
        store: &SessionStore,
        password: &str,
        confirm: &str,
    ) -> Result<Navigation, PortalError> {
        self.error = None;
        let result = self.try_finalize(store, password, confirm).await;
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }

    async fn try_finalize(
        &self,
        store: &SessionStore,
        password: &str,
        confirm: &str,
    ) -> Result<Navigation, PortalError> {
        validate_passwords(password, confirm)?;
        let _busy = self.submitting.start()?;
        self.api.finalize_account(&self.email, password).await?;
        store.login(&self.email, password).await?;
        tracing::debug!(email = %self.email, "account finalized");
        Ok(Navigation::replace(Route::Dashboard))
    }
}

fn validate_passwords(password: &str, confirm: &str) -> Result<(), PortalError> {
    if password != confirm {
        return Err(PortalError::Validation("Passwords do not match.".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PortalError::Validation(
            "Password must be at least 6 characters.".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("secret1", "secret2", Some("Passwords do not match."))]
    #[case("abc", "abc", Some("Password must be at least 6 characters."))]
    #[case("abc", "abcd", Some("Passwords do not match."))]
    #[case("secret1", "secret1", None)]
    fn password_rules(#[case] password: &str, #[case] confirm: &str, #[case] expected: Option<&str>) {
        let got = validate_passwords(password, confirm).err().map(|e| e.to_string());
        assert_eq!(got.as_deref(), expected);
    }

    #[test]
    fn missing_email_redirects_to_wizard() {
        let api = ApiClient::new("http://127.0.0.1:9");
        let nav = SuccessPage::open(api.clone(), None).unwrap_err();
        assert_eq!(nav, Navigation::replace(Route::Partner));

        let blank = Some(NavState {
            email: "  ".into(),
            biz_name: None,
        });
        assert!(SuccessPage::open(api, blank).is_err());
    }

    #[test]
    fn greeting_uses_business_name() {
        let api = ApiClient::new("http://127.0.0.1:9");
        let page = SuccessPage::open(
            api,
            Some(NavState {
                email: "a@b.ca".into(),
                biz_name: Some("Sage Café".into()),
            }),
        )
        .unwrap();
        assert_eq!(page.greeting(), "Thanks, Sage Café!");
    }
}
