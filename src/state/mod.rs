//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `ui`) so components depend
//! on small focused models provided through context.

pub mod session;
pub mod toast;
pub mod ui;
