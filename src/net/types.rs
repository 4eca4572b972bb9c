//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! The token endpoint returns `user_id` as a JSON number, but the client only
//! stores it as an opaque string, so deserialization accepts either form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-issued login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Bearer credential for subsequent requests.
    pub token: String,
    /// Opaque user identifier.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    /// Login handle.
    #[serde(default)]
    pub username: Option<String>,
    /// Friendly name shown in the UI.
    #[serde(default)]
    pub display_username: Option<String>,
}

impl LoginPayload {
    /// Payload carrying only a token and username.
    #[must_use]
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self { token: token.into(), username: Some(username.into()), ..Self::default() }
    }
}

/// Username/password pair posted to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account creation form posted to the users endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number user id")),
    }
}

/// Task row as listed on the tasks page. Unused server fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of `low`, `medium`, `high`, `urgent`.
    #[serde(default)]
    pub priority: String,
    /// One of `todo`, `in_progress`, `done`, `archived`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl TaskSummary {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.status.as_str(), "done" | "archived")
    }
}
