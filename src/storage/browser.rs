//! `window.localStorage` backend.
//!
//! Client-side (hydrate): every call looks up `localStorage` on the current
//! window, so the handle stays `Send + Sync` and fits in a reactive signal.
//! Server-side (SSR) and native test builds: every call reports
//! [`StorageError::Unavailable`].

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "browser_test.rs"]
mod browser_test;

use super::KeyValueStore;
use crate::error::StorageError;

/// Zero-sized handle to the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        local_storage()?.clear().map_err(js_error)
    }
}

#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
