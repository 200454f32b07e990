//! Partner dashboard: review gate and the licensing roadmap.

use anang_api::{ApiClient, LicenseFile, LicenseReceipt};
use anang_auth::AuthError;
use anang_core::entities::{PartnerProfile, Session};
use anang_core::enums::ApprovalStatus;
use anang_core::roadmap::{GO_LIVE_STEP, Progress};
use anang_core::{MAX_PROGRESS, MIN_PROGRESS};
use serde::Serialize;

use crate::error::PortalError;
use crate::tasks::{Generation, InFlight};

/// What the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Loading,
    PendingReview,
    Rejected,
    Roadmap,
}

/// Result of a "mark as done" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not offered for this step, or already done. Nothing was sent.
    Unchanged,
    Advanced { progress: u8 },
}

#[derive(Debug)]
pub struct DashboardPage {
    api: ApiClient,
    generation: Generation,
    email: Option<String>,
    user_status: Option<ApprovalStatus>,
    profile: Option<PartnerProfile>,
    load_error: Option<String>,
    uploaded: bool,
    marking: InFlight,
    uploading: InFlight,
}

impl DashboardPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            generation: Generation::new(),
            email: None,
            user_status: None,
            profile: None,
            load_error: None,
            uploaded: false,
            marking: InFlight::new(),
            uploading: InFlight::new(),
        }
    }

    /// Fetch the profile for the signed-in user.
    ///
    /// A failed fetch still leaves the page usable with the default profile
    /// (progress 1, unverified, no application); the message is kept in
    /// [`Self::load_error`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] for an anonymous session.
    pub async fn load(&mut self, session: &Session) -> Result<(), PortalError> {
        let user = session.user().ok_or(AuthError::NotAuthenticated)?;
        self.email = Some(user.email.clone());
        self.user_status = user.status;

        let ticket = self.generation.begin();
        let outcome = self.api.get_dashboard_data(&user.email).await;
        if !ticket.is_current() {
            return Ok(());
        }
        match outcome {
            Ok(profile) => {
                self.profile = Some(profile);
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "dashboard data unavailable, showing defaults");
                self.profile = Some(PartnerProfile::default());
                self.load_error = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// Review gate: the session's status wins over the profile's; missing
    /// means approved.
    #[must_use]
    pub fn status(&self) -> ApprovalStatus {
        self.user_status
            .or_else(|| self.profile.as_ref().and_then(|p| p.auth.status))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn view(&self) -> DashboardView {
        if self.profile.is_none() {
            return DashboardView::Loading;
        }
        match self.status() {
            ApprovalStatus::PendingReview => DashboardView::PendingReview,
            ApprovalStatus::Rejected => DashboardView::Rejected,
            ApprovalStatus::Approved => DashboardView::Roadmap,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let auth = self.profile.as_ref().map(|p| &p.auth);
        let progress = Progress::new(
            auth.map_or(MIN_PROGRESS, |a| a.progress),
            auth.is_some_and(|a| a.is_verified),
        );
        if self.uploaded {
            progress.with_upload()
        } else {
            progress
        }
    }

    #[must_use]
    pub fn profile(&self) -> Option<&PartnerProfile> {
        self.profile.as_ref()
    }

    /// Whether the "upload your license" banner applies.
    #[must_use]
    pub fn needs_license(&self) -> bool {
        self.profile.as_ref().is_some_and(PartnerProfile::needs_license)
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading.is_busy()
    }

    /// Busy flag of the upload control, for display.
    #[must_use]
    pub fn uploading(&self) -> InFlight {
        self.uploading.clone()
    }

    /// Busy flag of the "mark as done" controls.
    #[must_use]
    pub fn marking(&self) -> InFlight {
        self.marking.clone()
    }

    /// Mark a middle step as done.
    ///
    /// Steps outside `2..=6`, or already done, are a no-op. Progress only
    /// ever moves forward.
    ///
    /// # Errors
    ///
    /// [`PortalError::NotApproved`] while the account is pending review or
    /// rejected, [`PortalError::Busy`] while another mark is outstanding, or
    /// the backend error; local state is unchanged on failure.
    pub async fn mark_step_done(&mut self, step_id: u8) -> Result<StepOutcome, PortalError> {
        self.ensure_approved()?;
        if !self.progress().can_mark_done(step_id) {
            return Ok(StepOutcome::Unchanged);
        }
        let email = self.email.clone().ok_or(AuthError::NotAuthenticated)?;
        let _busy = self.marking.start()?;

        let update = self.api.update_progress(&email, Some(step_id)).await?;
        let returned = update.progress.clamp(MIN_PROGRESS, MAX_PROGRESS);
        let profile = self.profile.get_or_insert_with(PartnerProfile::default);
        profile.auth.progress = profile.auth.progress.max(returned);
        tracing::debug!(step_id, progress = profile.auth.progress, "step marked done");
        Ok(StepOutcome::Advanced {
            progress: profile.auth.progress,
        })
    }

    /// Upload the city license for the go-live step.
    ///
    /// # Errors
    ///
    /// [`PortalError::NotApproved`] outside the roadmap view,
    /// [`PortalError::Locked`] before step 6 is done, a validation error for a
    /// disallowed file type (nothing is sent), [`PortalError::Busy`] during
    /// another upload, or the backend error. Nothing changes on failure.
    pub async fn upload_license(&mut self, file: LicenseFile) -> Result<LicenseReceipt, PortalError> {
        self.ensure_approved()?;
        if !self.progress().go_live_unlocked() {
            return Err(PortalError::Locked);
        }
        file.ensure_allowed()?;
        let email = self.email.clone().ok_or(AuthError::NotAuthenticated)?;
        let _busy = self.uploading.start()?;

        let receipt = self.api.upload_license(&email, file).await?;
        let profile = self.profile.get_or_insert_with(PartnerProfile::default);
        profile.auth.progress = GO_LIVE_STEP;
        profile.auth.is_verified = true;
        profile.business.license_url = Some(receipt.filename.clone());
        self.uploaded = true;
        tracing::debug!(filename = %receipt.filename, "license uploaded");
        Ok(receipt)
    }

    fn ensure_approved(&self) -> Result<(), PortalError> {
        match self.view() {
            DashboardView::PendingReview | DashboardView::Rejected => {
                Err(PortalError::NotApproved(self.status()))
            }
            DashboardView::Loading | DashboardView::Roadmap => Ok(()),
        }
    }

    /// Stop applying in-flight loads.
    pub fn dispose(&mut self) {
        self.generation.dispose();
    }
}
