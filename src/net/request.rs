//! Per-call request builder.
//!
//! DESIGN
//! ======
//! There is no process-wide default-header map. Each call site builds an
//! [`ApiRequest`] and opts into credentials with [`ApiRequest::authorized`],
//! which reads the token from the session it is handed. After logout the
//! same call simply carries no `Authorization` header.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;

use crate::state::session::Session;

pub const AUTHORIZATION: &str = "Authorization";
pub const AUTH_SCHEME: &str = "Token";

/// `Authorization` header value for `session`, or `None` when logged out.
#[must_use]
pub fn authorization_header(session: &Session) -> Option<String> {
    session.token().map(|token| format!("{AUTH_SCHEME} {token}"))
}

/// Join an API base and a path without doubling or dropping the slash.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully described HTTP request, independent of any HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Set `name` to `value`, replacing an existing header of the same name
    /// (case-insensitive).
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Attach the session's credential. A logged-out session removes any
    /// `Authorization` header already present.
    #[must_use]
    pub fn authorized(mut self, session: &Session) -> Self {
        match authorization_header(session) {
            Some(value) => self.header(AUTHORIZATION, value),
            None => {
                self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(AUTHORIZATION));
                self
            }
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `body` cannot be represented as JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    /// Send through `gloo-net`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request cannot be built or sent.
    #[cfg(feature = "hydrate")]
    pub async fn send(self) -> Result<gloo_net::http::Response, String> {
        use gloo_net::http::Request;

        let mut builder = match self.method {
            Method::Get => Request::get(&self.url),
            Method::Post => Request::post(&self.url),
        };
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = match &self.body {
            Some(body) => builder.json(body).map_err(|e| e.to_string())?,
            None => builder.build().map_err(|e| e.to_string())?,
        };
        request.send().await.map_err(|e| e.to_string())
    }
}
