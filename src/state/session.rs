//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for "who is logged in". The
//! app constructs one at startup, restores it from storage, and provides it
//! through context to the route guard, the request builder, and any
//! identity-dependent component.
//!
//! CONSISTENCY
//! ===========
//! Every mutating operation finishes its storage writes before touching the
//! in-memory session, and after `Ok` the persisted keys match the session
//! exactly. A failure before anything is written leaves the session as it
//! was. A login that fails partway through rolls the session keys back and
//! ends logged out, so storage never pairs one user's token with another
//! user's name.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::StorageError;
use crate::net::types::LoginPayload;
use crate::storage::{
    BrowserStore, DISPLAY_USERNAME_KEY, KeyValueStore, TOKEN_KEY, USER_ID_KEY, USERNAME_KEY,
    set_or_remove,
};

/// Who the current user is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub display_name: Option<String>,
}

impl Identity {
    /// Name to show in the UI: display name when set, username otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Credentials {
    token: String,
    identity: Identity,
}

/// In-memory login state. A token and an identity are either both present or
/// both absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn logged_in(token: impl Into<String>, identity: Identity) -> Self {
        Self { credentials: Some(Credentials { token: token.into(), identity }) }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.credentials.as_ref().map(|c| &c.identity)
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.credentials.is_some() { AuthStatus::Authenticated } else { AuthStatus::Unauthenticated }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Authentication status as seen by the route guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Session state backed by a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Logged-out store over `storage`. Call [`restore`](Self::restore) to
    /// pick up a persisted session.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::logged_out() }
    }

    #[cfg(test)]
    pub(crate) fn with_session(storage: S, session: Session) -> Self {
        Self { storage, session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.session.status()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Rebuild the session from persisted storage.
    ///
    /// A missing or empty token means logged out; a missing username restores
    /// as an empty handle. Calling this repeatedly with unchanged storage
    /// yields the same session every time.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures; the session is left untouched.
    pub fn restore(&mut self) -> Result<&Session, StorageError> {
        let token = self.storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let restored = match token {
            Some(token) => {
                let username = self.storage.get(USERNAME_KEY)?.unwrap_or_default();
                let display_name = self.storage.get(DISPLAY_USERNAME_KEY)?;
                Session::logged_in(token, Identity { username, display_name })
            }
            None => Session::logged_out(),
        };
        if restored.is_authenticated() {
            log::info!("session restored");
        }
        self.session = restored;
        Ok(&self.session)
    }

    /// Persist a server-issued login and switch the session to it.
    ///
    /// Every storage key gets the payload's value, or is removed when the
    /// payload leaves that field out, so no stale identity survives.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures. If the token write itself fails the
    /// session is left untouched; a later failure removes the session keys
    /// and leaves the store logged out.
    pub fn login(&mut self, payload: LoginPayload) -> Result<(), StorageError> {
        let LoginPayload { token, user_id, username, display_username } = payload;

        self.storage.set(TOKEN_KEY, &token)?;
        let rest = set_or_remove(&mut self.storage, USER_ID_KEY, user_id.as_deref())
            .and_then(|()| set_or_remove(&mut self.storage, USERNAME_KEY, username.as_deref()))
            .and_then(|()| {
                set_or_remove(&mut self.storage, DISPLAY_USERNAME_KEY, display_username.as_deref())
            });
        if let Err(err) = rest {
            self.rollback_login();
            return Err(err);
        }

        let identity = Identity { username: username.unwrap_or_default(), display_name: display_username };
        log::info!("logged in as {}", identity.username);
        self.session = Session::logged_in(token, identity);
        Ok(())
    }

    /// Drop a half-written login. The token goes first so that whatever
    /// survives a failing backend restores as logged out.
    fn rollback_login(&mut self) {
        for key in [TOKEN_KEY, USER_ID_KEY, USERNAME_KEY, DISPLAY_USERNAME_KEY] {
            if let Err(err) = self.storage.remove(key) {
                log::warn!("login rollback could not remove {key}: {err}");
            }
        }
        self.session = Session::logged_out();
    }

    /// Wipe all persisted application state and drop the session.
    ///
    /// # Errors
    ///
    /// Propagates the storage clear failure; the session is left untouched.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.clear()?;
        self.session = Session::logged_out();
        log::info!("logged out");
        Ok(())
    }
}

/// Session store as provided through context by the app.
///
/// `loading` stays `true` until the client has restored the persisted
/// session, so the guard does not redirect on the server render or before
/// hydration catches up.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub store: SessionStore<BrowserStore>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first restore.
    #[must_use]
    pub fn pending() -> Self {
        Self { store: SessionStore::new(BrowserStore), loading: true }
    }
}
