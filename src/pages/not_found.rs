//! Fallback view for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guarded::Guarded;
use crate::routing::RouteName;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Guarded route=RouteName::NotFound>
            <section class="not-found-page">
                <h1>"Page not found."</h1>
                <A href=RouteName::Tasks.path()>"Back to my tasks"</A>
            </section>
        </Guarded>
    }
}
