//! Routes, navigation requests and the route guard.

use std::fmt;

use anang_core::entities::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Discovery,
    Partner,
    Success,
    Login,
    Dashboard,
}

impl Route {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Discovery,
        Self::Partner,
        Self::Success,
        Self::Login,
        Self::Dashboard,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Discovery => "/discovery",
            Self::Partner => "/partner",
            Self::Success => "/success",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// State carried from the partner wizard to the success page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biz_name: Option<String>,
}

/// A navigation a controller asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: Route,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NavState>,
    /// Replace the current history entry instead of pushing.
    #[serde(default)]
    pub replace: bool,
}

impl Navigation {
    #[must_use]
    pub const fn to(route: Route) -> Self {
        Self {
            route,
            state: None,
            replace: false,
        }
    }

    #[must_use]
    pub const fn replace(route: Route) -> Self {
        Self {
            route,
            state: None,
            replace: true,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: NavState) -> Self {
        self.state = Some(state);
        self
    }
}

/// Where a navigation actually lands.
///
/// `/dashboard` needs a session and falls back to `/login`; `/success`
/// needs an email in the navigation state and falls back to `/partner`.
#[must_use]
pub fn resolve(navigation: &Navigation, session: &Session) -> Route {
    match navigation.route {
        route if route.requires_auth() && !session.is_authenticated() => Route::Login,
        Route::Success
            if navigation
                .state
                .as_ref()
                .is_none_or(|s| s.email.trim().is_empty()) =>
        {
            Route::Partner
        }
        route => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anang_core::entities::User;
    use rstest::rstest;

    fn signed_in() -> Session {
        Session::Authenticated {
            user: User {
                id: "a@b.ca".into(),
                email: "a@b.ca".into(),
                name: "a".into(),
                status: None,
                business_name: None,
            },
            token: "tok".into(),
        }
    }

    #[rstest]
    #[case("/", Some(Route::Home))]
    #[case("/dashboard/", Some(Route::Dashboard))]
    #[case("/discovery?tab=food", Some(Route::Discovery))]
    #[case("/admin", None)]
    fn parses_paths(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[test]
    fn dashboard_requires_session() {
        let nav = Navigation::to(Route::Dashboard);
        assert_eq!(resolve(&nav, &Session::Anonymous), Route::Login);
        assert_eq!(resolve(&nav, &signed_in()), Route::Dashboard);
    }

    #[test]
    fn success_requires_email_state() {
        let bare = Navigation::to(Route::Success);
        assert_eq!(resolve(&bare, &Session::Anonymous), Route::Partner);

        let with_email = Navigation::to(Route::Success).with_state(NavState {
            email: "a@b.ca".into(),
            biz_name: None,
        });
        assert_eq!(resolve(&with_email, &Session::Anonymous), Route::Success);
    }

    #[test]
    fn public_routes_pass_through() {
        for route in [Route::Home, Route::Discovery, Route::Partner, Route::Login] {
            assert_eq!(resolve(&Navigation::to(route), &Session::Anonymous), route);
        }
    }
}
