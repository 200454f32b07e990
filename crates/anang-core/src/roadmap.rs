//! The City of Kingston licensing roadmap and its progress model.
//!
//! The catalog is static. Everything else here is derived from two inputs:
//! the stored `progress` (1–7) and whether the account is verified.
//!
//! ```text
//! step 1        always done
//! steps 2..=6   done iff progress >= id, else available
//! step 7        locked iff progress < 6, else available until verified, then done
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StepStatus;
use crate::errors::CoreError;
use crate::{MAX_PROGRESS, MIN_PROGRESS};

/// Id of the terminal "go live" step.
pub const GO_LIVE_STEP: u8 = 7;

/// Progress required before the go-live step unlocks.
pub const UNLOCK_PROGRESS: u8 = 6;

/// What the step's call-to-action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepAction {
    None,
    Link {
        label: &'static str,
        href: &'static str,
    },
    Mailto {
        label: &'static str,
        href: &'static str,
    },
    Upload {
        label: &'static str,
    },
}

impl StepAction {
    /// Target URL for link and mailto actions.
    #[must_use]
    pub const fn href(&self) -> Option<&'static str> {
        match self {
            Self::Link { href, .. } | Self::Mailto { href, .. } => Some(*href),
            Self::None | Self::Upload { .. } => None,
        }
    }
}

/// One entry of the licensing roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RoadmapStep {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub why_it_matters: &'static str,
    pub action: StepAction,
}

/// The seven licensing steps, in order.
pub const STEPS: [RoadmapStep; 7] = [
    RoadmapStep {
        id: 1,
        title: "Join AnangAI Community",
        subtitle: "Your digital home is ready.",
        why_it_matters: "You're part of the partner pipeline and can track your licensing journey here.",
        action: StepAction::None,
    },
    RoadmapStep {
        id: 2,
        title: "Initial Consultation",
        subtitle: "Speak to a Licensing Agent (613-546-4291 ext. 3150) or email licensingapplications@cityofkingston.ca.",
        why_it_matters: "The City confirms your business type and required permits before you invest time in other steps.",
        action: StepAction::Mailto {
            label: "Draft Consultation Email",
            href: "mailto:licensingapplications@cityofkingston.ca?subject=Business%20Licensing%20Consultation",
        },
    },
    RoadmapStep {
        id: 3,
        title: "Provincial Registration",
        subtitle: "Register your Business Name at Service Ontario (1201 Division St).",
        why_it_matters: "Your business must be registered provincially before the City can issue a local license.",
        action: StepAction::Link {
            label: "Open ServiceOntario Portal",
            href: "https://www.ontario.ca/page/business-services",
        },
    },
    RoadmapStep {
        id: 4,
        title: "Zoning Verification",
        subtitle: "Check if your location is zoned for your business type via Kingston Planning Dept.",
        why_it_matters: "Zoning ensures your address is permitted for your use, and is required before final license approval.",
        action: StepAction::Link {
            label: "Open Kingston Zoning Map",
            href: "https://www.cityofkingston.ca/planning-and-development/zoning-bylaws/zoning-bylaw-map/",
        },
    },
    RoadmapStep {
        id: 5,
        title: "Tax (HST) Setup",
        subtitle: "Register for your HST number with the Canada Revenue Agency (CRA).",
        why_it_matters: "Many business licenses require proof of HST registration for tax compliance.",
        action: StepAction::Link {
            label: "Open CRA Business Portal",
            href: "https://www.canada.ca/en/revenue-agency/services/tax/businesses/topics/registering-your-business.html",
        },
    },
    RoadmapStep {
        id: 6,
        title: "Safety Clearances",
        subtitle: "Gather Fire & Health inspection documents for your specific business type.",
        why_it_matters: "Safety clearances protect you and your customers and are required for license issuance.",
        action: StepAction::Link {
            label: "View Fire Safety Checklists",
            href: "https://www.cityofkingston.ca/residents/fire-emergency-services/fire-prevention",
        },
    },
    RoadmapStep {
        id: 7,
        title: "GO LIVE",
        subtitle: "Upload your final City Business License PDF to unlock your public profile.",
        why_it_matters: "Once verified, your business appears on KingstonAI for visitors and locals to discover.",
        action: StepAction::Upload {
            label: "Upload & Verify",
        },
    },
];

/// Look up a step by id.
///
/// # Errors
///
/// Returns [`CoreError::UnknownStep`] for ids outside `1..=7`.
pub fn step(id: u8) -> Result<&'static RoadmapStep, CoreError> {
    STEPS
        .iter()
        .find(|s| s.id == id)
        .ok_or(CoreError::UnknownStep(id))
}

/// Snapshot of the inputs the roadmap is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Progress {
    progress: u8,
    is_verified: bool,
    uploaded: bool,
}

impl Progress {
    /// Build a snapshot. `progress` is clamped into `1..=7`.
    #[must_use]
    pub const fn new(progress: u8, is_verified: bool) -> Self {
        let progress = if progress < MIN_PROGRESS {
            MIN_PROGRESS
        } else if progress > MAX_PROGRESS {
            MAX_PROGRESS
        } else {
            progress
        };
        Self {
            progress,
            is_verified,
            uploaded: false,
        }
    }

    /// Same snapshot with the local upload-success flag set.
    #[must_use]
    pub const fn with_upload(mut self) -> Self {
        self.uploaded = true;
        self
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.progress
    }

    #[must_use]
    pub const fn is_verified(self) -> bool {
        self.is_verified
    }

    /// Whether the account is verified or a license upload just succeeded.
    #[must_use]
    pub const fn is_live(self) -> bool {
        self.is_verified || self.uploaded
    }

    #[must_use]
    pub const fn go_live_unlocked(self) -> bool {
        self.progress >= UNLOCK_PROGRESS
    }

    /// Render status of the step with the given id.
    #[must_use]
    pub const fn status_of(self, step_id: u8) -> StepStatus {
        match step_id {
            1 => StepStatus::Done,
            GO_LIVE_STEP => {
                if !self.go_live_unlocked() {
                    StepStatus::Locked
                } else if self.is_live() {
                    StepStatus::Done
                } else {
                    StepStatus::Available
                }
            }
            id => {
                if self.progress >= id {
                    StepStatus::Done
                } else {
                    StepStatus::Available
                }
            }
        }
    }

    /// Whether the "mark as done" control is offered for the step.
    #[must_use]
    pub const fn can_mark_done(self, step_id: u8) -> bool {
        step_id >= 2 && step_id < GO_LIVE_STEP && self.progress < step_id
    }

    /// Fraction of the progress track to fill, in `0.0..=1.0`.
    #[must_use]
    pub fn track_fill(self) -> f32 {
        f32::from(self.progress.min(UNLOCK_PROGRESS)) / f32::from(UNLOCK_PROGRESS)
    }

    /// Every step paired with its status.
    #[must_use]
    pub fn steps(self) -> Vec<(&'static RoadmapStep, StepStatus)> {
        STEPS.iter().map(|s| (s, self.status_of(s.id))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn catalog_is_ordered_by_id() {
        let ids: Vec<u8> = STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn step_one_is_always_done() {
        for p in 1..=7 {
            assert_eq!(Progress::new(p, false).status_of(1), StepStatus::Done);
        }
    }

    #[test]
    fn middle_steps_follow_progress() {
        for p in 1..=7 {
            let progress = Progress::new(p, false);
            for k in 2..=6 {
                let expected = if p >= k {
                    StepStatus::Done
                } else {
                    StepStatus::Available
                };
                assert_eq!(progress.status_of(k), expected, "progress {p}, step {k}");
            }
        }
    }

    #[rstest]
    #[case(1, false, StepStatus::Locked)]
    #[case(5, false, StepStatus::Locked)]
    #[case(5, true, StepStatus::Locked)]
    #[case(6, false, StepStatus::Available)]
    #[case(7, false, StepStatus::Available)]
    #[case(6, true, StepStatus::Done)]
    #[case(7, true, StepStatus::Done)]
    fn go_live_status(#[case] progress: u8, #[case] verified: bool, #[case] expected: StepStatus) {
        assert_eq!(Progress::new(progress, verified).status_of(7), expected);
    }

    #[test]
    fn upload_flag_completes_go_live() {
        let progress = Progress::new(6, false).with_upload();
        assert_eq!(progress.status_of(7), StepStatus::Done);
    }

    #[test]
    fn mark_done_offered_only_for_pending_middle_steps() {
        let progress = Progress::new(3, false);
        assert!(!progress.can_mark_done(1));
        assert!(!progress.can_mark_done(3));
        assert!(progress.can_mark_done(4));
        assert!(!progress.can_mark_done(7));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Progress::new(0, false).value(), 1);
        assert_eq!(Progress::new(9, false).value(), 7);
    }

    #[test]
    fn track_fill_caps_at_six() {
        assert!((Progress::new(3, false).track_fill() - 0.5).abs() < f32::EPSILON);
        assert!((Progress::new(7, true).track_fill() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_step_is_an_error() {
        assert!(step(8).is_err());
        assert_eq!(step(2).unwrap().title, "Initial Consultation");
    }
}
