//! Toast stack rendered above every page, plus the `notify` helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push toasts through [`notify`]; the stack reads the shared
//! `RwSignal<ToastQueue>` and lets the user dismiss entries by clicking.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastQueue};

/// Show a toast and schedule its removal after `duration_ms` (0 = sticky).
pub fn notify(toasts: RwSignal<ToastQueue>, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
    let message = message.into();
    let Some(id) = toasts.try_update(|q| q.push(message, kind, duration_ms)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let delay = toasts.with_untracked(|q| q.get(id).and_then(crate::state::toast::Toast::dismiss_after));
        if let Some(delay) = delay {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || {
                toasts.update(|q| q.dismiss(id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position list of visible toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.update(|q| q.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
