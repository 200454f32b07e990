//! # anang-portal
//!
//! Page controllers for the partner portal. Each controller owns its page
//! state and talks to the backend through [`anang_api::ApiClient`]; the
//! session is read from and changed through [`anang_auth::SessionStore`].
//!
//! - [`DiscoveryPage`]: category tabs and entries, with superseded fetches dropped
//! - [`DashboardPage`]: review gate and the licensing roadmap
//! - [`PartnerWizard`] and [`SuccessPage`]: apply, then create the login
//! - [`LoginPage`], [`ChatPanel`], and the [`Shell`] with its route guard

pub mod chat;
pub mod dashboard;
pub mod discovery;
pub mod error;
pub mod login;
pub mod partner;
pub mod route;
pub mod shell;
pub mod success;
pub mod tasks;

pub use chat::{ChatPanel, EMPTY_HINT, render_message};
pub use dashboard::{DashboardPage, DashboardView, StepOutcome};
pub use discovery::{DiscoveryPage, EntriesResult, PendingEntries};
pub use error::PortalError;
pub use login::LoginPage;
pub use partner::{ApplicationDraft, PartnerWizard};
pub use route::{NavState, Navigation, Route};
pub use shell::{NAV_ITEMS, NavItem, Shell};
pub use success::SuccessPage;
pub use tasks::{Generation, InFlight, InFlightGuard, Ticket};
