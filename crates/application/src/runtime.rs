//! Intent loop: turns dispatched intents into API calls and store updates.

use std::sync::Arc;

use conduit_domain::Location;
use tokio::task::JoinHandle;

use crate::intent::Intent;
use crate::ports::{ArticlesApi, IntentReceiver};
use crate::store::{Action, Store};
use crate::use_cases::{FetchArticles, FetchComments};

/// Consumes intents for the lifetime of the client.
///
/// Every fetch runs in its own task and is never cancelled. When fetches
/// overlap, whichever completes last determines the stored state.
pub struct IntentLoop<A> {
    fetch_articles: FetchArticles<A>,
    fetch_comments: FetchComments<A>,
    store: Store,
    page_limit: u32,
}

impl<A: ArticlesApi + 'static> IntentLoop<A> {
    /// Creates a loop fetching `page_limit` articles per page.
    #[must_use]
    pub fn new(api: Arc<A>, store: Store, page_limit: u32) -> Self {
        Self {
            fetch_articles: FetchArticles::new(Arc::clone(&api), store.clone()),
            fetch_comments: FetchComments::new(api, store.clone()),
            store,
            page_limit,
        }
    }

    /// Handles one intent.
    ///
    /// Fetches are spawned and their handle returned; navigation is applied
    /// before this returns.
    pub fn handle(&self, intent: Intent) -> Option<JoinHandle<()>> {
        if let Some(filter) = intent.article_filter(self.page_limit) {
            let use_case = self.fetch_articles.clone();
            return Some(tokio::spawn(async move {
                // Failures are already in the store.
                let _ = use_case.execute(filter).await;
            }));
        }

        match intent {
            Intent::FetchComments { slug } => {
                let use_case = self.fetch_comments.clone();
                Some(tokio::spawn(async move {
                    let _ = use_case.execute(&slug).await;
                }))
            }
            Intent::Navigate { url } => {
                tracing::debug!(%url, "navigating");
                self.store.apply(Action::Navigated(Location::parse(&url)));
                None
            }
            Intent::FetchAll { .. }
            | Intent::FetchByAuthor { .. }
            | Intent::FetchFavoritedByAuthor { .. } => None,
        }
    }

    /// Runs until every sender of the intent channel is dropped.
    pub async fn run(self, mut intents: IntentReceiver) {
        while let Some(intent) = intents.recv().await {
            self.handle(intent);
        }
        tracing::debug!("intent channel closed");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ports::{Dispatcher, intent_channel};
    use crate::test_support::FakeApi;
    use conduit_domain::Display;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn slugs(store: &Store) -> Vec<String> {
        store
            .snapshot()
            .articles
            .fetch
            .items()
            .iter()
            .map(|a| a.slug.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_fetch_intent_uses_page_limit() {
        let api = Arc::new(FakeApi::default());
        let store = Store::default();
        let intents = IntentLoop::new(Arc::clone(&api), store.clone(), 20);

        let handle = intents.handle(Intent::FetchByAuthor {
            page: 3,
            username: "jane".to_string(),
        });
        handle.expect("fetch spawns").await.unwrap();

        assert_eq!(slugs(&store), vec!["page-3"]);
        let filter = &api.seen_filters()[0];
        assert_eq!(filter.limit, 20);
        assert_eq!(filter.offset(), 40);
        assert_eq!(filter.author.as_deref(), Some("jane"));
    }

    #[tokio::test]
    async fn test_navigate_updates_location() {
        let store = Store::default();
        let intents = IntentLoop::new(Arc::new(FakeApi::default()), store.clone(), 10);

        let handle = intents.handle(Intent::Navigate {
            url: "/author/@jane?page=2".to_string(),
        });

        assert!(handle.is_none());
        assert_eq!(store.snapshot().location, Location::parse("/author/@jane?page=2"));
    }

    #[tokio::test]
    async fn test_late_completion_overwrites() {
        let api = Arc::new(FakeApi::default());
        api.delay_page(1, Duration::from_millis(60));
        let store = Store::default();
        let intents = IntentLoop::new(api, store.clone(), 10);

        let slow = intents
            .handle(Intent::FetchAll { page: 1, tag: None })
            .unwrap();
        let fast = intents
            .handle(Intent::FetchAll { page: 2, tag: None })
            .unwrap();

        fast.await.unwrap();
        assert_eq!(slugs(&store), vec!["page-2"]);
        slow.await.unwrap();
        assert_eq!(slugs(&store), vec!["page-1"]);
    }

    #[tokio::test]
    async fn test_run_drains_channel() {
        let store = Store::default();
        let mut receiver = store.subscribe();
        let intents = IntentLoop::new(Arc::new(FakeApi::default()), store.clone(), 10);
        let (sender, rx) = intent_channel();
        let running = tokio::spawn(intents.run(rx));

        sender.dispatch(Intent::FetchComments {
            slug: "hello".to_string(),
        });
        drop(sender);
        running.await.unwrap();

        let state = receiver
            .wait_for(|s| !s.comments.fetch.is_fetching())
            .await
            .unwrap()
            .clone();
        assert_eq!(state.comments.display(), Display::EmptyView);
    }
}
