//! Transient notification queue.
//!
//! DESIGN
//! ======
//! The queue only stores toasts and hands out ids. Scheduling the
//! auto-dismiss timer is the UI's job (`components::toast_stack`), using
//! [`Toast::dismiss_after`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// CSS modifier class for the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
            Self::Warning => "toast toast--warning",
        }
    }
}

/// A single visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Lifetime in milliseconds; `0` keeps the toast until dismissed.
    pub duration_ms: u32,
}

impl Toast {
    /// Delay before the toast should disappear on its own, if any.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        (self.duration_ms > 0).then(|| Duration::from_millis(u64::from(self.duration_ms)))
    }
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), kind, duration_ms });
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }
}
