//! Navigation guard consulted before every route change.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::guarded::Guarded` wraps each routed page, reads the session
//! from context, and applies the [`Navigation`] this module computes. The
//! guard itself is pure so its rules can be tested without a router.
//!
//! RULES
//! =====
//! Evaluated in order, first match wins:
//! 1. logged out, target is neither the auth route nor an exempt not-found
//!    route: redirect to the auth route.
//! 2. logged in, target is the auth route: redirect to the landing route.
//! 3. otherwise allow.
//!
//! The guard is UX only; the API still has to reject unauthenticated calls.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{Route, RouteName};
use super::title::page_title;
use crate::state::session::AuthStatus;

/// Adjustable guard policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Let logged-out users see the not-found view instead of bouncing them
    /// to login.
    pub exempt_not_found: bool,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self { exempt_not_found: true }
    }
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(RouteName),
}

/// Decision plus the page title to show if the navigation is allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub decision: NavigationDecision,
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    policy: GuardPolicy,
    auth_route: RouteName,
    landing_route: RouteName,
    not_found_route: RouteName,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(GuardPolicy::default())
    }
}

impl RouteGuard {
    #[must_use]
    pub fn new(policy: GuardPolicy) -> Self {
        Self {
            policy,
            auth_route: RouteName::Auth,
            landing_route: RouteName::Tasks,
            not_found_route: RouteName::NotFound,
        }
    }

    /// Decide whether a navigation to `target` may proceed.
    #[must_use]
    pub fn evaluate(&self, status: AuthStatus, target: RouteName) -> NavigationDecision {
        let exempt = self.policy.exempt_not_found && target == self.not_found_route;
        match status {
            AuthStatus::Unauthenticated if !exempt && target != self.auth_route => {
                NavigationDecision::Redirect(self.auth_route)
            }
            AuthStatus::Authenticated if target == self.auth_route => {
                NavigationDecision::Redirect(self.landing_route)
            }
            _ => NavigationDecision::Allow,
        }
    }

    /// Evaluate the guard and derive the page title for `route`.
    #[must_use]
    pub fn navigate(&self, status: AuthStatus, route: &Route) -> Navigation {
        let decision = self.evaluate(status, route.name);
        if let NavigationDecision::Redirect(to) = decision {
            log::debug!("guard redirect {} -> {}", route.name, to);
        }
        Navigation { decision, title: page_title(route) }
    }
}
