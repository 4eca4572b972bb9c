use super::*;
use crate::net::types::LoginPayload;
use crate::state::session::SessionStore;
use crate::storage::BrowserStore;

#[test]
fn nav_links_logged_out_offer_login_and_register() {
    let links = nav_links(AuthStatus::Unauthenticated);
    assert_eq!(
        links,
        vec![("/auth?mode=login".to_owned(), "Login"), ("/auth?mode=register".to_owned(), "Register")]
    );
}

#[test]
fn nav_links_logged_in_offer_tasks_and_profile() {
    let labels: Vec<_> = nav_links(AuthStatus::Authenticated).into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels, ["Tasks", "Profile"]);
}

#[test]
fn greeting_absent_when_logged_out() {
    assert!(greeting(&AuthState::default()).is_none());
}

#[test]
fn greeting_uses_identity_label() {
    // BrowserStore rejects writes off-browser.
    let mut memory = SessionStore::new(crate::storage::MemoryStore::new());
    memory.login(LoginPayload::new("t", "alice")).unwrap();
    let session = memory.session().clone();

    let state = AuthState { store: SessionStore::with_session(BrowserStore, session), loading: false };
    assert_eq!(greeting(&state).as_deref(), Some("Hi, alice"));
}
