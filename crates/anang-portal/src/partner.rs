//! Three-step partner application wizard.

use anang_api::{ApiClient, ApplicationForm, LicenseFile};
use anang_core::enums::BusinessType;

use crate::error::PortalError;
use crate::route::{NavState, Navigation, Route};
use crate::tasks::InFlight;

pub const WIZARD_STEPS: u8 = 3;

/// Values entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub email: String,
    pub business_name: String,
    pub business_type: Option<BusinessType>,
    pub description: String,
    pub contact: String,
}

#[derive(Debug)]
pub struct PartnerWizard {
    api: ApiClient,
    step: u8,
    pub draft: ApplicationDraft,
    license: Option<LicenseFile>,
    error: Option<String>,
    submitting: InFlight,
}

impl PartnerWizard {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            step: 1,
            draft: ApplicationDraft::default(),
            license: None,
            error: None,
            submitting: InFlight::new(),
        }
    }

    #[must_use]
    pub const fn step(&self) -> u8 {
        self.step
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    #[must_use]
    pub const fn license(&self) -> Option<&LicenseFile> {
        self.license.as_ref()
    }

    /// Attach (or with `None`, detach) the optional license file.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a disallowed file type.
    pub fn set_license(&mut self, file: Option<LicenseFile>) -> Result<(), PortalError> {
        if let Some(file) = &file {
            file.ensure_allowed()?;
        }
        self.license = file;
        Ok(())
    }

    /// Validate the current step and advance. Stays on the last step.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Validation`] naming the first missing field.
    pub fn next(&mut self) -> Result<u8, PortalError> {
        self.record(validate_step(&self.draft, self.step))?;
        self.step = (self.step + 1).min(WIZARD_STEPS);
        Ok(self.step)
    }

    /// Go back one step. Never below the first.
    pub fn back(&mut self) -> u8 {
        self.error = None;
        self.step = self.step.saturating_sub(1).max(1);
        self.step
    }

    /// Clear everything and return to step 1.
    pub fn reset(&mut self) {
        self.step = 1;
        self.draft = ApplicationDraft::default();
        self.license = None;
        self.error = None;
    }

    /// Submit from the last step; on success the navigation carries the
    /// email and business name to the success page.
    ///
    /// # Errors
    ///
    /// [`PortalError::Validation`] when not on the last step or a field is
    /// missing, [`PortalError::Busy`] during another submit, or the backend
    /// error (recorded in [`Self::error`]).
    pub async fn submit(&mut self) -> Result<Navigation, PortalError> {
        if self.step != WIZARD_STEPS {
            return self.record(Err(PortalError::Validation(
                "Finish every step before submitting.".into(),
            )));
        }
        for step in 1..=WIZARD_STEPS {
            self.record(validate_step(&self.draft, step))?;
        }
        let _busy = self.submitting.start()?;

        let draft = &self.draft;
        let form = ApplicationForm {
            email: draft.email.trim().to_string(),
            business_name: draft.business_name.trim().to_string(),
            business_type: draft
                .business_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            business_description: draft.description.trim().to_string(),
            contact: draft.contact.trim().to_string(),
        };
        let state = NavState {
            email: form.email.clone(),
            biz_name: Some(form.business_name.clone()).filter(|n| !n.is_empty()),
        };
        let outcome = self
            .api
            .submit_application(form, self.license.clone())
            .await
            .map_err(PortalError::from);
        self.record(outcome)?;
        tracing::debug!(email = %state.email, "application submitted");
        Ok(Navigation::to(Route::Success).with_state(state))
    }

    fn record<T>(&mut self, result: Result<T, PortalError>) -> Result<T, PortalError> {
        match result {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

fn validate_step(draft: &ApplicationDraft, step: u8) -> Result<(), PortalError> {
    let missing =
        |message: &str| -> Result<(), PortalError> { Err(PortalError::Validation(message.to_string())) };
    match step {
        1 if !looks_like_email(&draft.email) => missing("Enter a valid email address."),
        1 if draft.business_name.trim().is_empty() => missing("Business name is required."),
        2 if draft.business_type.is_none() => missing("Choose a business type."),
        3 if draft.contact.trim().is_empty() => missing("Contact is required."),
        _ => Ok(()),
    }
}

fn looks_like_email(email: &str) -> bool {
    email
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> PartnerWizard {
        PartnerWizard::new(ApiClient::new("http://127.0.0.1:9"))
    }

    #[test]
    fn next_validates_current_step() {
        let mut w = wizard();
        assert!(w.next().is_err());
        assert_eq!(w.error(), Some("Enter a valid email address."));
        w.draft.email = "a@b.ca".into();
        w.draft.business_name = "Sage Café".into();
        assert_eq!(w.next().unwrap(), 2);
        assert!(w.error().is_none());
        assert!(w.next().is_err());
        w.draft.business_type = Some(BusinessType::Cafe);
        assert_eq!(w.next().unwrap(), 3);
        w.draft.contact = "613-555-0100".into();
        assert_eq!(w.next().unwrap(), 3);
    }

    #[test]
    fn back_never_goes_below_one() {
        let mut w = wizard();
        assert_eq!(w.back(), 1);
    }

    #[test]
    fn disallowed_license_is_rejected() {
        let mut w = wizard();
        assert!(w.set_license(Some(LicenseFile::new("x.docx", vec![]))).is_err());
        assert!(w.license().is_none());
        w.set_license(Some(LicenseFile::new("x.pdf", vec![]))).unwrap();
        assert!(w.license().is_some());
    }

    #[tokio::test]
    async fn submit_before_last_step_is_rejected() {
        let mut w = wizard();
        assert!(matches!(w.submit().await, Err(PortalError::Validation(_))));
    }

    #[test]
    fn reset_clears_draft() {
        let mut w = wizard();
        w.draft.email = "a@b.ca".into();
        w.draft.business_name = "x".into();
        w.next().unwrap();
        w.reset();
        assert_eq!(w.step(), 1);
        assert_eq!(w.draft, ApplicationDraft::default());
    }
}
