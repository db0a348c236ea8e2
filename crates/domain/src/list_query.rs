//! Typed view of the list filters carried by a location.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::location::{Location, RouteParams};
use crate::pagination::{PAGE_PARAM, parse_page};

/// Filters for an article list, parsed once per render cycle.
///
/// Unlike [`crate::QueryString`], values here are percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// One-based page number.
    pub page: u32,
    /// Tag filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Author filter, taken from the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Whether the `favorited` flag is present.
    #[serde(default)]
    pub favorited: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            tag: None,
            username: None,
            favorited: false,
        }
    }
}

impl ListQuery {
    /// Parses a search string together with the route params.
    #[must_use]
    pub fn parse(search: &str, route: &RouteParams) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let mut page = None;
        let mut tag = None;
        let mut favorited = false;

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                PAGE_PARAM if page.is_none() => page = Some(value.into_owned()),
                "tag" if tag.is_none() && !value.is_empty() => tag = Some(value.into_owned()),
                "favorited" => favorited = true,
                _ => {}
            }
        }

        Self {
            page: parse_page(page.as_deref()),
            tag,
            username: route.username().map(str::to_string),
            favorited,
        }
    }

    /// Parses the filters of a full location.
    #[must_use]
    pub fn from_location(location: &Location) -> Self {
        Self::parse(&location.search, &location.route_params())
    }

    /// Returns true if any filter beyond the page is active.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.tag.is_some() || self.username.is_some() || self.favorited
    }
}
