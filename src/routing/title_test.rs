use super::*;

fn at(name: RouteName, mode: Option<&str>) -> Route {
    Route { name, mode: mode.map(str::to_owned) }
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_defaults_to_login_when_absent() {
    assert_eq!(AuthMode::from_query(None), AuthMode::Login);
}

#[test]
fn auth_mode_parses_register() {
    assert_eq!(AuthMode::from_query(Some("register")), AuthMode::Register);
    assert_eq!(AuthMode::from_query(Some("Register")), AuthMode::Register);
}

#[test]
fn auth_mode_unrecognized_falls_back_to_login() {
    assert_eq!(AuthMode::from_query(Some("reset")), AuthMode::Login);
    assert_eq!(AuthMode::from_query(Some("")), AuthMode::Login);
}

#[test]
fn auth_mode_toggle_and_href() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.href(), "/auth?mode=register");
}

// =============================================================
// Titles
// =============================================================

#[test]
fn capitalize_uppercases_first_letter() {
    assert_eq!(capitalize("login"), "Login");
    assert_eq!(capitalize(""), "");
}

#[test]
fn auth_title_reflects_register_mode() {
    assert_eq!(page_title(&at(RouteName::Auth, Some("register"))), "Register");
}

#[test]
fn auth_title_without_query_is_login() {
    assert_eq!(page_title(&at(RouteName::Auth, None)), "Login");
}

#[test]
fn non_auth_routes_use_static_title() {
    assert_eq!(page_title(&at(RouteName::Tasks, None)), "My Tasks");
    assert_eq!(page_title(&at(RouteName::Profile, Some("register"))), "User Profile");
}

#[test]
fn document_title_prefixes_app_name() {
    assert_eq!(document_title("Calentasker", "Login"), "Calentasker | Login");
}
