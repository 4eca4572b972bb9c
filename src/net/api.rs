//! REST API helpers for the Calentasker backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, built with
//! [`ApiRequest`](super::request::ApiRequest).
//! Server-side (SSR) and native tests: stubs returning an error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so the UI can show the
//! failure as a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginPayload, RegisterRequest, TaskSummary};
use crate::state::session::Session;

/// Token endpoint returning a [`LoginPayload`].
pub const LOGIN_PATH: &str = "/api/auth/token/";
/// Account creation endpoint.
pub const USERS_PATH: &str = "/api/users/";
/// Task list endpoint.
pub const TASKS_PATH: &str = "/api/tasks/";

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(action: &str, status: u16) -> String {
    match status {
        400 if action == "login" => "Invalid username or password.".to_owned(),
        401 | 403 => format!("{action} not authorized ({status})"),
        _ => format!("{action} failed: {status}"),
    }
}

/// Exchange a username and password for a token.
///
/// # Errors
///
/// Returns an error string if the request fails, the server rejects the
/// credentials, or the response is not a login payload.
pub async fn login(api_base: &str, username: &str, password: &str) -> Result<LoginPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::request::{ApiRequest, endpoint};
        use super::types::LoginRequest;

        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = ApiRequest::post(endpoint(api_base, LOGIN_PATH))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await?;
        if !resp.ok() {
            return Err(failed_message("login", resp.status()));
        }
        resp.json::<LoginPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account. The caller logs in afterwards.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn register(api_base: &str, form: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use super::request::{ApiRequest, endpoint};

        let resp = ApiRequest::post(endpoint(api_base, USERS_PATH))
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await?;
        if !resp.ok() {
            return Err(failed_message("register", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, form);
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's tasks with the session's credential attached.
///
/// # Errors
///
/// Returns an error string if the request fails, the session is rejected, or
/// the response is not a task list.
pub async fn fetch_tasks(api_base: &str, session: &Session) -> Result<Vec<TaskSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::request::{ApiRequest, endpoint};

        let resp = ApiRequest::get(endpoint(api_base, TASKS_PATH)).authorized(session).send().await?;
        if !resp.ok() {
            return Err(failed_message("task list", resp.status()));
        }
        resp.json::<Vec<TaskSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, session);
        Err("not available on server".to_owned())
    }
}
