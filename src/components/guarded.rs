//! Route guard component wrapping every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page renders its body inside `<Guarded route=...>`. The component asks
//! [`RouteGuard`] for a decision whenever the session or the `mode` query
//! changes, performs redirects with `replace` so the blocked URL does not
//! stay in history, and keeps the document title in sync.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ClientConfig;
use crate::routing::title::document_title;
use crate::routing::{NavigationDecision, Route, RouteGuard, RouteName};
use crate::state::session::AuthState;

/// Render `children` only when the guard allows `route`.
#[component]
pub fn Guarded(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = expect_context::<RouteGuard>();
    let app_name = expect_context::<ClientConfig>().app_name;
    let query = use_query_map();
    let navigate = use_navigate();

    let navigation = Memo::new(move |_| {
        let status = auth.with(|state| state.store.status());
        let mode = query.with(|q| q.get("mode"));
        guard.navigate(status, &Route { name: route, mode })
    });

    Effect::new(move || {
        if auth.with(|state| state.loading) {
            return;
        }
        if let NavigationDecision::Redirect(to) = navigation.get().decision {
            navigate(to.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let allowed = move || {
        !auth.with(|state| state.loading) && navigation.with(|n| n.decision == NavigationDecision::Allow)
    };

    view! {
        <Title text=move || document_title(&app_name, &navigation.with(|n| n.title.clone()))/>
        <Show when=allowed>{children()}</Show>
    }
}
