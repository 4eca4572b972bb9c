//! Client configuration.
//!
//! The WASM bundle has no process environment, so overrides are read at
//! build time with `option_env!`. Everything has a working default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routing::GuardPolicy;

/// Default application name shown in document titles.
pub const DEFAULT_APP_NAME: &str = "Calentasker";
/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub app_name: String,
    /// Prefix for API request paths. Empty means same origin.
    pub api_base: String,
    pub guard: GuardPolicy,
    pub toast_duration_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            api_base: String::new(),
            guard: GuardPolicy::default(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `CALENTASKER_*` variables set at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CALENTASKER_API_BASE"),
            option_env!("CALENTASKER_EXEMPT_NOT_FOUND"),
            option_env!("CALENTASKER_TOAST_MS"),
        )
    }

    fn from_overrides(api_base: Option<&str>, exempt_not_found: Option<&str>, toast_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        if let Some(flag) = exempt_not_found.and_then(parse_flag) {
            config.guard.exempt_not_found = flag;
        }
        if let Some(ms) = toast_ms.and_then(|v| v.trim().parse().ok()) {
            config.toast_duration_ms = ms;
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
