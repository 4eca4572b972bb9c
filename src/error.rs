//! Error types shared by the client core.
//!
//! ERROR HANDLING
//! ==============
//! Only the storage port can fail inside the core. Missing keys are valid
//! "logged out" state and never surface here.

/// Failure reported by a [`crate::storage::KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, SSR).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation, e.g. quota exceeded.
    #[error("storage backend error: {0}")]
    Backend(String),
}
