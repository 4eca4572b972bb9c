//! Page-title derivation for each navigation.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use super::routes::{Route, RouteName};

/// Which form the auth page shows, selected by the `mode` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Parse the `mode` query value. Absent or unrecognized values mean login.
    #[must_use]
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode.map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("register") => Self::Register,
            _ => Self::Login,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    /// The other mode, for the "switch to register/login" link.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Auth page URL that opens this mode.
    #[must_use]
    pub fn href(self) -> String {
        format!("{}?mode={}", RouteName::Auth.path(), self.as_str())
    }
}

/// Uppercase the first character of `s`.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human-readable title for `route`.
#[must_use]
pub fn page_title(route: &Route) -> String {
    match route.name {
        RouteName::Auth => capitalize(AuthMode::from_query(route.mode.as_deref()).as_str()),
        other => other.meta_title().to_owned(),
    }
}

/// Full document title, e.g. `Calentasker | My Tasks`.
#[must_use]
pub fn document_title(app_name: &str, page: &str) -> String {
    format!("{app_name} | {page}")
}
