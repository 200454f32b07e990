//! Partner applications: guest submission and the legacy one-shot registration.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError, LicenseFile};

const SUBMIT: Messages = Messages {
    fallback: "Submission failed",
    by_status: &[
        (409, "Application already submitted for this email"),
        (400, "Invalid request"),
    ],
};

const REGISTER: Messages = Messages {
    fallback: "Registration failed",
    by_status: &[(409, "Email already registered"), (400, "Invalid request")],
};

/// Business details collected by the partner wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub email: String,
    pub business_name: String,
    pub business_type: String,
    pub business_description: String,
    pub contact: String,
}

impl ApplicationForm {
    fn into_form(self) -> Form {
        Form::new()
            .text("email", self.email.trim().to_string())
            .text("businessName", self.business_name)
            .text("businessType", self.business_type)
            .text("businessDescription", self.business_description)
            .text("contact", self.contact)
    }
}

/// Legacy registration: the application plus a username and password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerRegistration {
    pub username: String,
    pub password: String,
    pub application: ApplicationForm,
}

/// Acknowledgement for a submitted application or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ApiClient {
    /// Submit business details, optionally with a license file.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for a disallowed file type (nothing is sent),
    /// [`ApiError::Conflict`] for a duplicate application,
    /// [`ApiError::Precondition`] for invalid input.
    pub async fn submit_application(
        &self,
        form: ApplicationForm,
        license: Option<LicenseFile>,
    ) -> Result<ApplicationReceipt, ApiError> {
        let mut multipart = form.into_form();
        if let Some(file) = license {
            file.ensure_allowed()?;
            multipart = multipart.part("license_file", file.into_part());
        }
        let url = self.url("/api/submit-application");
        tracing::debug!(%url, "POST submit-application");
        let resp = http::send(self.http.post(&url).multipart(multipart)).await?;
        http::json(resp, &SUBMIT).await
    }

    /// One-shot registration with password and optional driver's license.
    ///
    /// # Errors
    ///
    /// [`ApiError::Conflict`] when the email is registered,
    /// [`ApiError::Precondition`] for invalid input.
    pub async fn register_partner(
        &self,
        registration: PartnerRegistration,
        drivers_license: Option<LicenseFile>,
    ) -> Result<ApplicationReceipt, ApiError> {
        let mut multipart = registration
            .application
            .into_form()
            .text("username", registration.username)
            .text("password", registration.password);
        if let Some(file) = drivers_license {
            file.ensure_allowed()?;
            multipart = multipart.part("drivers_license", file.into_part());
        }
        let url = self.url("/api/register");
        tracing::debug!(%url, "POST register");
        let resp = http::send(self.http.post(&url).multipart(multipart)).await?;
        http::json(resp, &REGISTER).await
    }
}
