//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` builds HTTP requests and attaches credentials per call, `api`
//! wraps the endpoints the pages use, and `types` defines the wire schema.

pub mod api;
pub mod request;
pub mod types;
