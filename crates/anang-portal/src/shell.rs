//! Application shell: sidebar state and the current route.

use anang_core::entities::Session;

use crate::route::{NavState, Navigation, Route, resolve};

/// A sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        route: Route::Home,
        label: "Home",
    },
    NavItem {
        route: Route::Discovery,
        label: "Explore Services",
    },
    NavItem {
        route: Route::Partner,
        label: "Get Featured",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    sidebar_open: bool,
    route: Route,
    state: Option<NavState>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sidebar_open: false,
            route: Route::Home,
            state: None,
        }
    }

    #[must_use]
    pub const fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub const fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub const fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    #[must_use]
    pub const fn current(&self) -> Route {
        self.route
    }

    /// Navigation state the current route was entered with.
    #[must_use]
    pub const fn state(&self) -> Option<&NavState> {
        self.state.as_ref()
    }

    #[must_use]
    pub const fn nav_items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    /// Apply a navigation through the route guard. Closes the sidebar.
    pub fn navigate(&mut self, navigation: Navigation, session: &Session) -> Route {
        let landed = resolve(&navigation, session);
        if landed != navigation.route {
            tracing::debug!(requested = %navigation.route, %landed, "navigation redirected");
        }
        self.state = if landed == navigation.route {
            navigation.state
        } else {
            None
        };
        self.route = landed;
        self.sidebar_open = false;
        landed
    }
}
