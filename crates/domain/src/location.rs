//! Address bar location and the route params derived from it.

use serde::{Deserialize, Serialize};

const AUTHOR_PREFIX: &str = "/author/";

/// Path-derived parameters, distinct from query-string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Author filter from an `/author/<username>` route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl RouteParams {
    /// Route params for an author page.
    #[must_use]
    pub fn author(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Returns the username if present and non-empty.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Returns the list path these params route to.
    #[must_use]
    pub fn base_path(&self) -> String {
        self.username()
            .map_or_else(|| "/".to_string(), |u| format!("{AUTHOR_PREFIX}{u}"))
    }
}

/// The current address: a path plus a search string (`?...` or empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path component, always starting with `/`.
    pub pathname: String,
    /// Search component including the leading `?`, or empty.
    pub search: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
        }
    }
}

impl Location {
    /// Splits an in-app URL such as `/author/@jane?favorited&page=2`.
    ///
    /// Fragments (`#...`) are discarded and a missing path becomes `/`.
    #[must_use]
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(head, _)| head);
        let (path, search) = match url.find('?') {
            Some(index) => url.split_at(index),
            None => (url, ""),
        };
        let pathname = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let search = if search == "?" { "" } else { search };
        Self {
            pathname,
            search: search.to_string(),
        }
    }

    /// Derives route params from the path.
    #[must_use]
    pub fn route_params(&self) -> RouteParams {
        let username = self
            .pathname
            .strip_prefix(AUTHOR_PREFIX)
            .map(|rest| rest.split('/').next().unwrap_or_default())
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        RouteParams { username }
    }

    /// Returns the location as a URL string.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}
