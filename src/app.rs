//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toast_stack::ToastStack};
use crate::config::ClientConfig;
use crate::pages::{auth::AuthPage, not_found::NotFoundPage, profile::ProfilePage, tasks::TasksPage};
use crate::routing::{RouteGuard, RouteName};
use crate::state::{session::AuthState, toast::ToastQueue, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, guard, config, toast, and UI contexts and restores
/// the persisted session once the client is running.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastQueue::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(RouteGuard::new(config.guard));
    provide_context(config.clone());
    provide_context(auth);
    provide_context(toasts);
    provide_context(ui);

    // Effects only run in the browser, so SSR keeps `loading` set and the
    // guard holds off until real storage has been read.
    Effect::new(move || {
        let dark = auth
            .try_update(|state| {
                if let Err(err) = state.store.restore() {
                    log::warn!("session restore failed: {err}");
                }
                state.loading = false;
                crate::util::dark_mode::read_preference(state.store.storage())
            })
            .unwrap_or(false);
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/calentasker.css"/>
        <Title text=config.app_name.clone()/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(RouteName::Tasks.segment()) view=TasksPage/>
                    <Route path=StaticSegment(RouteName::Auth.segment()) view=AuthPage/>
                    <Route path=StaticSegment(RouteName::Profile.segment()) view=ProfilePage/>
                    <Route path=StaticSegment(RouteName::NotFound.segment()) view=NotFoundPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
