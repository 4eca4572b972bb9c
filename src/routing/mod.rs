//! Client-side routing core: route table, navigation guard, page titles.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts the Leptos routes from [`routes::RouteName`]; every page is
//! wrapped by the guard component, which delegates to [`guard::RouteGuard`].

pub mod guard;
pub mod routes;
pub mod title;

pub use guard::{GuardPolicy, Navigation, NavigationDecision, RouteGuard};
pub use routes::{Route, RouteName};
pub use title::AuthMode;
