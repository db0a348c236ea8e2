//! Pagination URL derivation.
//!
//! Page numbers are one-based everywhere in this module except for the
//! paginator index helpers, which speak the zero-based `selected` index
//! that paginator widgets report.

use crate::location::RouteParams;
use crate::query::{QueryParam, QueryString};

/// Number of articles requested per page.
pub const BASE_LIMIT: u32 = 10;

/// Name of the page query parameter.
pub const PAGE_PARAM: &str = "page";

/// Builds the URL of `target_page` for the list currently shown.
///
/// Every existing `page` parameter is dropped and `page=<target_page>` is
/// appended, with 0 raised to 1; all other parameters, bare flags included, are kept verbatim in
/// their original order. The path is `/author/<username>` when the route has
/// a username and `/` otherwise.
///
/// ```
/// use conduit_domain::{RouteParams, build_page_url};
///
/// assert_eq!(build_page_url("?tag=foo", &RouteParams::default(), 2), "/?tag=foo&page=2");
/// assert_eq!(
///     build_page_url("?favorited", &RouteParams::author("@john_doe"), 2),
///     "/author/@john_doe?favorited&page=2"
/// );
/// ```
#[must_use]
pub fn build_page_url(current_search: &str, route: &RouteParams, target_page: u32) -> String {
    let mut query = QueryString::parse(current_search);
    query.remove(PAGE_PARAM);
    query.push(QueryParam::new(PAGE_PARAM, target_page.max(1).to_string()));
    format!("{}{query}", route.base_path())
}

/// Reads a page number, falling back to 1 for absent, non-numeric or zero input.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Number of pages needed to show `total_count` items, `limit` per page.
#[must_use]
pub const fn page_count(total_count: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_count.div_ceil(limit as u64)
}

/// Zero-based paginator index for a one-based page.
#[must_use]
pub const fn forced_page_index(page: u32) -> u32 {
    page.saturating_sub(1)
}

/// One-based page for a zero-based paginator index.
#[must_use]
pub const fn page_from_selected(selected: u32) -> u32 {
    selected.saturating_add(1)
}

/// Offset of the first item of `page` when `limit` items fit on a page.
#[must_use]
pub const fn page_offset(page: u32, limit: u32) -> u64 {
    forced_page_index(page) as u64 * limit as u64
}
