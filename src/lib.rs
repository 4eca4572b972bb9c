//! # calentasker
//!
//! Leptos + WASM client for the Calentasker task list.
//!
//! The core is UI-agnostic: [`state::session::SessionStore`] owns the login
//! state on top of a [`storage::KeyValueStore`] port, [`routing::RouteGuard`]
//! decides every navigation, and [`net::request::ApiRequest`] attaches the
//! session credential per call. `app`, `pages`, and `components` wire those
//! into the Leptos view tree.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
