//! Fetch articles use case.

use std::sync::Arc;

use conduit_domain::ArticleFilter;

use crate::ApplicationResult;
use crate::ports::ArticlesApi;
use crate::store::{Action, Store};

/// Fetches one page of articles into the store.
pub struct FetchArticles<A> {
    api: Arc<A>,
    store: Store,
}

impl<A> Clone for FetchArticles<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store.clone(),
        }
    }
}

impl<A: ArticlesApi> FetchArticles<A> {
    /// Creates a new `FetchArticles` use case.
    #[must_use]
    pub const fn new(api: Arc<A>, store: Store) -> Self {
        Self { api, store }
    }

    /// Marks the list as loading, fetches, then stores the page or the error.
    ///
    /// Returns the total article count reported by the server.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been recorded in the store.
    pub async fn execute(&self, filter: ArticleFilter) -> ApplicationResult<u64> {
        tracing::debug!(
            page = filter.page,
            tag = ?filter.tag,
            author = ?filter.author,
            favorited_by = ?filter.favorited_by,
            "fetching articles"
        );
        self.store.apply(Action::ArticlesRequested);

        match self.api.list_articles(&filter).await {
            Ok(page) => {
                let total = page.articles_count;
                tracing::debug!(count = page.articles.len(), total, "articles loaded");
                self.store.apply(Action::ArticlesLoaded(page));
                Ok(total)
            }
            Err(error) => {
                tracing::warn!(%error, page = filter.page, "failed to fetch articles");
                self.store.apply(Action::ArticlesFailed(error.to_string()));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ApplicationError;
    use crate::test_support::FakeApi;
    use conduit_domain::Display;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_success_populates_list() {
        let api = Arc::new(FakeApi::default());
        let store = Store::default();
        let use_case = FetchArticles::new(Arc::clone(&api), store.clone());

        let total = use_case
            .execute(ArticleFilter::page(2, 10).with_tag("rust"))
            .await
            .expect("Should succeed");

        assert_eq!(total, 50);
        let state = store.snapshot();
        assert_eq!(state.articles.total_count, 50);
        match state.articles.display() {
            Display::ListView(items) => assert_eq!(items[0].slug, "page-2"),
            other => panic!("unexpected display {}", other.name()),
        }
        assert_eq!(api.seen_filters(), vec![ArticleFilter::page(2, 10).with_tag("rust")]);
    }

    #[tokio::test]
    async fn test_failure_is_recorded() {
        let api = Arc::new(FakeApi::failing(ApplicationError::Timeout { timeout_ms: 5 }));
        let store = Store::default();
        let use_case = FetchArticles::new(api, store.clone());

        let result = use_case.execute(ArticleFilter::page(1, 10)).await;

        assert_eq!(result, Err(ApplicationError::Timeout { timeout_ms: 5 }));
        let state = store.snapshot();
        assert_eq!(state.articles.display(), Display::ErrorView);
        assert_eq!(
            state.articles.fetch.error_message(),
            Some("request timed out after 5ms")
        );
    }
}
