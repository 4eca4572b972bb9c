//! Dark mode initialization and toggle.
//!
//! The preference lives in the same key-value storage as the session, so the
//! full wipe on logout resets it too. Applying the `.dark-mode` class on
//! `<html>` requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "calentasker_dark";

/// Stored preference, if the user ever chose one.
#[must_use]
pub fn stored_preference<S: KeyValueStore + ?Sized>(storage: &S) -> Option<bool> {
    match storage.get(STORAGE_KEY) {
        Ok(Some(val)) => Some(val == "true"),
        Ok(None) => None,
        Err(err) => {
            log::warn!("dark mode preference unreadable: {err}");
            None
        }
    }
}

/// Stored preference, falling back to the system color scheme.
#[must_use]
pub fn read_preference<S: KeyValueStore + ?Sized>(storage: &S) -> bool {
    stored_preference(storage).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
///
/// # Errors
///
/// Propagates the storage write failure; the class is still applied.
pub fn toggle<S: KeyValueStore + ?Sized>(storage: &mut S, current: bool) -> Result<bool, StorageError> {
    let next = !current;
    apply(next);
    storage.set(STORAGE_KEY, if next { "true" } else { "false" })?;
    Ok(next)
}
