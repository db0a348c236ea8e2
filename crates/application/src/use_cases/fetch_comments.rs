//! Fetch comments use case.

use std::sync::Arc;

use crate::ApplicationResult;
use crate::ports::ArticlesApi;
use crate::store::{Action, Store};

/// Fetches the comments of one article into the store.
pub struct FetchComments<A> {
    api: Arc<A>,
    store: Store,
}

impl<A> Clone for FetchComments<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store.clone(),
        }
    }
}

impl<A: ArticlesApi> FetchComments<A> {
    /// Creates a new `FetchComments` use case.
    #[must_use]
    pub const fn new(api: Arc<A>, store: Store) -> Self {
        Self { api, store }
    }

    /// Executes the use case, returning the number of comments.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been recorded in the store.
    pub async fn execute(&self, slug: &str) -> ApplicationResult<usize> {
        tracing::debug!(slug, "fetching comments");
        self.store.apply(Action::CommentsRequested);

        match self.api.list_comments(slug).await {
            Ok(comments) => {
                let count = comments.len();
                self.store.apply(Action::CommentsLoaded(comments));
                Ok(count)
            }
            Err(error) => {
                tracing::warn!(%error, slug, "failed to fetch comments");
                self.store.apply(Action::CommentsFailed(error.to_string()));
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
    use crate::test_support::{FakeApi, comment};
    use conduit_domain::Display;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_no_comments_is_empty_view() {
        let store = Store::default();
        let use_case = FetchComments::new(Arc::new(FakeApi::default()), store.clone());

        assert_eq!(use_case.execute("slug").await, Ok(0));
        assert_eq!(store.snapshot().comments.display(), Display::EmptyView);
    }

    #[tokio::test]
    async fn test_comments_loaded() {
        let api = FakeApi::default();
        api.comments.lock().unwrap().extend([comment(1), comment(2)]);
        let store = Store::default();
        let use_case = FetchComments::new(Arc::new(api), store.clone());

        assert_eq!(use_case.execute("slug").await, Ok(2));
        assert_eq!(store.snapshot().comments.fetch.items().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_error_view() {
        let api = FakeApi::failing(ApplicationError::NotFound("slug".to_string()));
        let store = Store::default();
        let use_case = FetchComments::new(Arc::new(api), store.clone());

        assert!(use_case.execute("slug").await.is_err());
        assert_eq!(store.snapshot().comments.display(), Display::ErrorView);
    }
}
