//! Reusable UI components shared by the pages.

pub mod guarded;
pub mod nav_bar;
pub mod toast_stack;
