//! Fetch-triggering controllers for list views.
//!
//! A controller watches a small set of inputs and dispatches a fetch intent
//! when, and only when, one of them changes by value. Everything else a view
//! receives (counts, unrelated location parts) never triggers a fetch.

use conduit_domain::{ListQuery, Location, RouteParams, build_page_url, page_from_selected};

use crate::intent::Intent;
use crate::ports::Dispatcher;

/// Picks the fetch intent for a search string and route.
#[must_use]
pub fn resolve_fetch_intent(search: &str, route: &RouteParams) -> Intent {
    Intent::for_list(&ListQuery::parse(search, route))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WatchedInputs {
    search: String,
    route: RouteParams,
}

impl WatchedInputs {
    fn new(search: &str, route: &RouteParams) -> Self {
        Self {
            search: search.to_string(),
            route: RouteParams {
                username: route.username().map(str::to_string),
            },
        }
    }
}

/// Drives fetching for the article list.
#[derive(Debug)]
pub struct ArticleListController<D> {
    dispatcher: D,
    watched: Option<WatchedInputs>,
}

impl<D: Dispatcher> ArticleListController<D> {
    /// Creates an unmounted controller.
    pub const fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            watched: None,
        }
    }

    /// Dispatches the initial fetch for a freshly shown list.
    pub fn mount(&mut self, search: &str, route: &RouteParams) -> Intent {
        let inputs = WatchedInputs::new(search, route);
        let intent = resolve_fetch_intent(&inputs.search, &inputs.route);
        self.watched = Some(inputs);
        self.dispatch(intent.clone());
        intent
    }

    /// Re-evaluates after the inputs may have changed.
    ///
    /// Returns the dispatched intent, or `None` when search and username are
    /// unchanged. An unmounted controller mounts.
    pub fn receive(&mut self, search: &str, route: &RouteParams) -> Option<Intent> {
        let inputs = WatchedInputs::new(search, route);
        if self.watched.as_ref() == Some(&inputs) {
            return None;
        }
        Some(self.mount(search, route))
    }

    /// [`Self::receive`] for a whole location.
    pub fn receive_location(&mut self, location: &Location) -> Option<Intent> {
        self.receive(&location.search, &location.route_params())
    }

    /// Handles a paginator click on the zero-based index `selected`.
    ///
    /// Dispatches the fetch for the new page, then navigation to its URL.
    /// The navigated search is recorded as already fetched, so the location
    /// change that follows does not fetch again. Returns the URL.
    pub fn select_page(&mut self, selected: u32) -> String {
        let route = self.route();
        let url = self.page_url(page_from_selected(selected));
        let search = Location::parse(&url).search;

        let intent = resolve_fetch_intent(&search, &route);
        self.watched = Some(WatchedInputs::new(&search, &route));
        self.dispatch(intent);
        self.dispatch(Intent::Navigate { url: url.clone() });
        url
    }

    /// URL of `target_page` for the list currently shown.
    #[must_use]
    pub fn page_url(&self, target_page: u32) -> String {
        build_page_url(self.search(), &self.route(), target_page)
    }

    /// The parsed filters currently shown.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery::parse(self.search(), &self.route())
    }

    fn search(&self) -> &str {
        self.watched.as_ref().map_or("", |w| w.search.as_str())
    }

    fn route(&self) -> RouteParams {
        self.watched
            .as_ref()
            .map(|w| w.route.clone())
            .unwrap_or_default()
    }

    fn dispatch(&self, intent: Intent) {
        tracing::debug!(?intent, "dispatching");
        self.dispatcher.dispatch(intent);
    }
}

/// Drives fetching for the comments of one article.
#[derive(Debug)]
pub struct CommentsController<D> {
    dispatcher: D,
    slug: Option<String>,
}

impl<D: Dispatcher> CommentsController<D> {
    /// Creates a controller with no article.
    pub const fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            slug: None,
        }
    }

    /// Fetches comments when the article changes. Returns true if dispatched.
    pub fn receive(&mut self, slug: &str) -> bool {
        if self.slug.as_deref() == Some(slug) {
            return false;
        }
        self.slug = Some(slug.to_string());
        self.dispatcher.dispatch(Intent::FetchComments {
            slug: slug.to_string(),
        });
        true
    }
}
