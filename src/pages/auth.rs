//! Auth page with login and register modes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `mode` query parameter picks the form. A successful login writes the
//! session through the context `SessionStore`; the surrounding guard then
//! sees an authenticated user on the auth route and bounces to the tasks page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::guarded::Guarded;
use crate::components::toast_stack::notify;
use crate::config::ClientConfig;
use crate::net::types::{LoginPayload, RegisterRequest};
use crate::routing::{AuthMode, RouteName};
use crate::state::session::AuthState;
use crate::state::toast::{ToastKind, ToastQueue};

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
    display_name: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Username, email, and password are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let display_name = display_name.trim();
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        display_name: (!display_name.is_empty()).then(|| display_name.to_owned()),
    })
}

/// Persist `payload` into the context session and report the outcome.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn complete_login(auth: RwSignal<AuthState>, toasts: RwSignal<ToastQueue>, payload: LoginPayload, duration_ms: u32) {
    match auth.try_update(|state| state.store.login(payload)) {
        Some(Ok(())) => {
            let name = auth.with_untracked(|state| {
                state.store.session().identity().map(|i| i.label().to_owned()).unwrap_or_default()
            });
            notify(toasts, format!("Welcome, {name}!"), ToastKind::Success, duration_ms);
        }
        Some(Err(err)) => {
            log::error!("failed to persist session: {err}");
            notify(toasts, format!("Could not save session: {err}"), ToastKind::Error, duration_ms);
        }
        None => {}
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let mode = Memo::new(move |_| AuthMode::from_query(query.with(|q| q.get("mode")).as_deref()));

    view! {
        <Guarded route=RouteName::Auth>
            <div class="auth-page">
                <div class="auth-card">
                    <Show when=move || mode.get() == AuthMode::Login fallback=|| view! { <RegisterForm/> }>
                        <LoginForm/>
                    </Show>
                    <p class="auth-card__switch">
                        <A href=move || mode.get().toggled().href()>
                            {move || match mode.get() {
                                AuthMode::Login => "Need an account? Register",
                                AuthMode::Register => "Already registered? Log in",
                            }}
                        </A>
                    </p>
                </div>
            </div>
        </Guarded>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let config = expect_context::<ClientConfig>();
    let api_base = StoredValue::new(config.api_base);
    let duration_ms = config.toast_duration_ms;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                notify(toasts, msg, ToastKind::Warning, duration_ms);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&api_base.get_value(), &user, &pass).await {
                Ok(payload) => complete_login(auth, toasts, payload, duration_ms),
                Err(e) => notify(toasts, format!("Login failed: {e}"), ToastKind::Error, duration_ms),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, api_base, auth);
        }
    };

    view! {
        <h1>"Login"</h1>
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                "Log In"
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let config = expect_context::<ClientConfig>();
    let api_base = StoredValue::new(config.api_base);
    let duration_ms = config.toast_duration_ms;

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &display_name.get(),
        ) {
            Ok(form) => form,
            Err(msg) => {
                notify(toasts, msg, ToastKind::Warning, duration_ms);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let base = api_base.get_value();
            let result = match crate::net::api::register(&base, &form).await {
                Ok(()) => crate::net::api::login(&base, &form.username, &form.password).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(payload) => complete_login(auth, toasts, payload, duration_ms),
                Err(e) => notify(toasts, format!("Registration failed: {e}"), ToastKind::Error, duration_ms),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, api_base, auth);
        }
    };

    view! {
        <h1>"Register"</h1>
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="text"
                placeholder="Display name (optional)"
                prop:value=move || display_name.get()
                on:input=move |ev| display_name.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                autocomplete="new-password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Confirm password"
                autocomplete="new-password"
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                "Create Account"
            </button>
        </form>
    }
}
