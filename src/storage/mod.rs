//! Key-value storage port used to persist session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store never touches `localStorage` directly. It talks to a
//! [`KeyValueStore`]: the app always holds a [`BrowserStore`], and tests run
//! against [`MemoryStore`]. Off the browser `BrowserStore` reports
//! `Unavailable`, which never surfaces on the server because session restore
//! happens in a client-only effect.

pub mod browser;
pub mod memory;

pub use browser::BrowserStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Opaque user identifier. Written on login, never read back by the client.
pub const USER_ID_KEY: &str = "user_id";
/// Login handle.
pub const USERNAME_KEY: &str = "username";
/// Optional friendly name.
pub const DISPLAY_USERNAME_KEY: &str = "display_username";

/// Flat string key-value storage.
///
/// Implementations report backend failures as [`StorageError`]; an absent key
/// is `Ok(None)`, not an error.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Remove every key in the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be cleared.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Write `value` under `key` when present, otherwise remove `key`.
///
/// # Errors
///
/// Propagates the backend's [`StorageError`].
pub fn set_or_remove<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: Option<&str>,
) -> Result<(), StorageError> {
    match value {
        Some(value) => store.set(key, value),
        None => store.remove(key),
    }
}
