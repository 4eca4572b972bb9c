//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its body in `components::guarded::Guarded` and delegates
//! shared chrome to `components`.

pub mod auth;
pub mod not_found;
pub mod profile;
pub mod tasks;
