//! Navigation views
//!
//! Maps a location path onto one of the fixed pages. Anything that is not a
//! known page, including the reserved `/timeline`, `/messages` and
//! `/settings`, is `NotFound`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Guests,
    Vendors,
    Tasks,
    Budget,
    NotFound,
}

impl View {
    /// Resolve a location path. Matching is case-sensitive; surrounding
    /// whitespace and a single trailing slash are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        match path {
            "/" | "/dashboard" => View::Dashboard,
            "/guests" => View::Guests,
            "/vendors" => View::Vendors,
            "/tasks" => View::Tasks,
            "/budget" => View::Budget,
            _ => View::NotFound,
        }
    }

    /// Canonical path of the view. `NotFound` has none of its own.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            View::Dashboard => Some("/dashboard"),
            View::Guests => Some("/guests"),
            View::Vendors => Some("/vendors"),
            View::Tasks => Some("/tasks"),
            View::Budget => Some("/budget"),
            View::NotFound => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Guests => "Guest List",
            View::Vendors => "Vendors",
            View::Tasks => "Tasks",
            View::Budget => "Budget",
            View::NotFound => "Page Not Found",
        }
    }

    /// Every navigable view, in sidebar order
    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Guests,
            View::Vendors,
            View::Tasks,
            View::Budget,
        ]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_dashboard() {
        assert_eq!(View::from_path("/"), View::Dashboard);
        assert_eq!(View::from_path("/dashboard"), View::Dashboard);
        assert_eq!(View::from_path(" /dashboard/ "), View::Dashboard);
    }

    #[test]
    fn test_known_pages() {
        for view in View::all() {
            let path = view.path().unwrap();
            assert_eq!(View::from_path(path), *view);
        }
        assert_eq!(View::from_path("/guests/"), View::Guests);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in ["/timeline", "/messages", "/settings", "/nope", "", "/Guests", "/guests/1"] {
            assert_eq!(View::from_path(path), View::NotFound, "{path}");
        }
        assert_eq!(View::NotFound.path(), None);
    }
}
