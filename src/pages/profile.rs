//! Profile page with identity details, theme toggle, and logout.

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::components::toast_stack::notify;
use crate::config::ClientConfig;
use crate::routing::RouteName;
use crate::state::session::AuthState;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Guarded route=RouteName::Profile>
            <ProfileCard/>
        </Guarded>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let duration_ms = expect_context::<ClientConfig>().toast_duration_ms;

    let identity = move || auth.with(|state| state.store.session().identity().cloned());
    let label = move || identity().map(|i| i.label().to_owned()).unwrap_or_default();
    let username = move || identity().map(|i| i.username).unwrap_or_default();

    let on_toggle_theme = move |_| {
        let current = ui.with_untracked(|u| u.dark_mode);
        let result = auth.try_update(|state| dark_mode::toggle(state.store.storage_mut(), current));
        match result {
            Some(Ok(next)) => ui.update(|u| u.dark_mode = next),
            Some(Err(err)) => log::warn!("dark mode preference not saved: {err}"),
            None => {}
        }
    };

    // The guard redirects to the auth page once the session is gone.
    let on_logout = move |_| match auth.try_update(|state| state.store.logout()) {
        Some(Ok(())) => {
            dark_mode::apply(false);
            ui.set(UiState::default());
            notify(toasts, "Logged out.", ToastKind::Info, duration_ms);
        }
        Some(Err(err)) => {
            log::error!("logout failed: {err}");
            notify(toasts, format!("Logout failed: {err}"), ToastKind::Error, duration_ms);
        }
        None => {}
    };

    view! {
        <section class="profile-page">
            <h1>"User Profile"</h1>
            <dl class="profile-page__details">
                <dt>"Name"</dt>
                <dd>{label}</dd>
                <dt>"Username"</dt>
                <dd>{username}</dd>
            </dl>
            <button class="profile-page__theme" on:click=on_toggle_theme>
                {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
            </button>
            <button class="profile-page__logout" on:click=on_logout>
                "Log Out"
            </button>
        </section>
    }
}
