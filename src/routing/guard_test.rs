use super::*;

fn at(name: RouteName, mode: Option<&str>) -> Route {
    Route { name, mode: mode.map(str::to_owned) }
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn unauthenticated_profile_redirects_to_auth() {
    let guard = RouteGuard::default();
    assert_eq!(
        guard.evaluate(AuthStatus::Unauthenticated, RouteName::Profile),
        NavigationDecision::Redirect(RouteName::Auth)
    );
}

#[test]
fn unauthenticated_tasks_redirects_to_auth() {
    let guard = RouteGuard::default();
    assert_eq!(
        guard.evaluate(AuthStatus::Unauthenticated, RouteName::Tasks),
        NavigationDecision::Redirect(RouteName::Auth)
    );
}

#[test]
fn unauthenticated_auth_is_allowed() {
    let guard = RouteGuard::default();
    assert_eq!(guard.evaluate(AuthStatus::Unauthenticated, RouteName::Auth), NavigationDecision::Allow);
}

#[test]
fn unauthenticated_not_found_is_exempt_by_default() {
    let guard = RouteGuard::default();
    assert_eq!(guard.evaluate(AuthStatus::Unauthenticated, RouteName::NotFound), NavigationDecision::Allow);
}

#[test]
fn not_found_exemption_can_be_disabled() {
    let guard = RouteGuard::new(GuardPolicy { exempt_not_found: false });
    assert_eq!(
        guard.evaluate(AuthStatus::Unauthenticated, RouteName::NotFound),
        NavigationDecision::Redirect(RouteName::Auth)
    );
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn authenticated_tasks_is_allowed() {
    let guard = RouteGuard::default();
    assert_eq!(guard.evaluate(AuthStatus::Authenticated, RouteName::Tasks), NavigationDecision::Allow);
}

#[test]
fn authenticated_auth_bounces_to_tasks() {
    let guard = RouteGuard::default();
    assert_eq!(
        guard.evaluate(AuthStatus::Authenticated, RouteName::Auth),
        NavigationDecision::Redirect(RouteName::Tasks)
    );
}

#[test]
fn authenticated_not_found_is_allowed_under_either_policy() {
    for exempt_not_found in [true, false] {
        let guard = RouteGuard::new(GuardPolicy { exempt_not_found });
        assert_eq!(guard.evaluate(AuthStatus::Authenticated, RouteName::NotFound), NavigationDecision::Allow);
    }
}

#[test]
fn redirect_targets_are_always_allowed_for_the_same_status() {
    let guard = RouteGuard::default();
    for status in [AuthStatus::Unauthenticated, AuthStatus::Authenticated] {
        for target in [RouteName::Tasks, RouteName::Auth, RouteName::Profile, RouteName::NotFound] {
            if let NavigationDecision::Redirect(to) = guard.evaluate(status, target) {
                assert_eq!(guard.evaluate(status, to), NavigationDecision::Allow, "{target} -> {to}");
            }
        }
    }
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_carries_register_title() {
    let guard = RouteGuard::default();
    let nav = guard.navigate(AuthStatus::Unauthenticated, &at(RouteName::Auth, Some("register")));
    assert_eq!(nav.decision, NavigationDecision::Allow);
    assert_eq!(nav.title, "Register");
}

#[test]
fn navigate_redirect_keeps_target_title() {
    let guard = RouteGuard::default();
    let nav = guard.navigate(AuthStatus::Unauthenticated, &at(RouteName::Profile, None));
    assert_eq!(nav.decision, NavigationDecision::Redirect(RouteName::Auth));
    assert_eq!(nav.title, "User Profile");
}

#[test]
fn default_policy_exempts_not_found() {
    assert!(GuardPolicy::default().exempt_not_found);
}
