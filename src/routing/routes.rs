//! Route table: names, paths, and static metadata titles.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

/// Every view the client can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    /// Authenticated landing page.
    Tasks,
    /// Login / register page.
    Auth,
    Profile,
    /// Fallback for unknown paths.
    NotFound,
}

impl RouteName {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Auth => "Auth",
            Self::Profile => "Profile",
            Self::NotFound => "NotFound",
        }
    }

    /// Path the view is mounted at. Unknown paths also render `NotFound`
    /// through the router fallback.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Tasks => "/",
            Self::Auth => "/auth",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Static page title from route metadata.
    #[must_use]
    pub fn meta_title(self) -> &'static str {
        match self {
            Self::Tasks => "My Tasks",
            Self::Auth => "Login",
            Self::Profile => "User Profile",
            Self::NotFound => "Not Found",
        }
    }

    /// Router segment the view is mounted at (the path without its leading
    /// slash).
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One navigation attempt: the target view plus the `mode` query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub name: RouteName,
    pub mode: Option<String>,
}
