//! Client state container.
//!
//! The [`Store`] is the single writer of fetch state. Views never mutate it;
//! they subscribe to a watch channel and are woken on every change.

use std::sync::Arc;

use conduit_domain::{Article, ArticlePage, Comment, ListState, Location};
use tokio::sync::watch;

/// Everything list views render from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// The article list.
    pub articles: ListState<Article>,
    /// Comments of the article being read.
    pub comments: ListState<Comment>,
    /// Current address.
    pub location: Location,
}

/// A state transition, applied by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An article fetch started.
    ArticlesRequested,
    /// An article fetch completed.
    ArticlesLoaded(ArticlePage),
    /// An article fetch failed.
    ArticlesFailed(String),
    /// A comment fetch started.
    CommentsRequested,
    /// A comment fetch completed.
    CommentsLoaded(Vec<Comment>),
    /// A comment fetch failed.
    CommentsFailed(String),
    /// The address changed.
    Navigated(Location),
}

/// Applies one action to the state.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::ArticlesRequested => state.articles.start(),
        Action::ArticlesLoaded(page) => state.articles.succeed(page.articles, page.articles_count),
        Action::ArticlesFailed(message) => state.articles.fail(message),
        Action::CommentsRequested => state.comments.start(),
        Action::CommentsLoaded(comments) => {
            let count = comments.len() as u64;
            state.comments.succeed(comments, count);
        }
        Action::CommentsFailed(message) => state.comments.fail(message),
        Action::Navigated(location) => state.location = location,
    }
}

/// Shared handle to the application state.
///
/// Cloning the handle shares the same state. Each applied action replaces the
/// state in place and notifies all subscribers; the last action applied wins.
#[derive(Debug, Clone)]
pub struct Store {
    sender: Arc<watch::Sender<AppState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Applies an action and notifies subscribers.
    pub fn apply(&self, action: Action) {
        tracing::trace!(?action, "applying action");
        self.sender.send_modify(|state| reduce(state, action));
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts with the current state marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.sender.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.sender.borrow().clone()
    }
}
