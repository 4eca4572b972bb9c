use super::*;

#[test]
fn failed_message_login_bad_request_is_friendly() {
    assert_eq!(failed_message("login", 400), "Invalid username or password.");
}

#[test]
fn failed_message_unauthorized_mentions_status() {
    assert_eq!(failed_message("task list", 401), "task list not authorized (401)");
}

#[test]
fn failed_message_formats_other_status() {
    assert_eq!(failed_message("register", 500), "register failed: 500");
}

#[test]
fn endpoints_are_absolute_paths() {
    for path in [LOGIN_PATH, USERS_PATH, TASKS_PATH] {
        assert!(path.starts_with("/api/"));
        assert!(path.ends_with('/'));
    }
}

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(LOGIN_PATH, "/api/auth/token/");
    assert_eq!(USERS_PATH, "/api/users/");
    assert_eq!(TASKS_PATH, "/api/tasks/");
}
