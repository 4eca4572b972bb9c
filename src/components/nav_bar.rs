//! Top navigation bar with identity-aware links.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::ClientConfig;
use crate::routing::{AuthMode, RouteName};
use crate::state::session::{AuthState, AuthStatus};
use crate::state::ui::UiState;

/// Links shown for `status`, as `(href, label)` pairs.
fn nav_links(status: AuthStatus) -> Vec<(String, &'static str)> {
    match status {
        AuthStatus::Authenticated => vec![
            (RouteName::Tasks.path().to_owned(), "Tasks"),
            (RouteName::Profile.path().to_owned(), "Profile"),
        ],
        AuthStatus::Unauthenticated => {
            vec![(AuthMode::Login.href(), "Login"), (AuthMode::Register.href(), "Register")]
        }
    }
}

/// Greeting for the signed-in user, if any.
fn greeting(state: &AuthState) -> Option<String> {
    state.store.session().identity().map(|identity| format!("Hi, {}", identity.label()))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let app_name = expect_context::<ClientConfig>().app_name;

    let links = move || auth.with(|state| nav_links(state.store.status()));
    let nav_class = move || if ui.get().nav_open { "nav nav--open" } else { "nav" };

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">{app_name}</span>
            <button class="top-bar__menu" on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)>
                "Menu"
            </button>
            <nav class=nav_class>
                <For
                    each=links
                    key=|(href, _)| href.clone()
                    children=move |(href, label)| {
                        view! {
                            <span class="nav__item" on:click=move |_| ui.update(UiState::close_nav)>
                                <A href=href>{label}</A>
                            </span>
                        }
                    }
                />
            </nav>
            <span class="top-bar__user">{move || auth.with(greeting)}</span>
        </header>
    }
}
