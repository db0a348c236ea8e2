//! Window loop: the glue between front end, controllers and store.
//!
//! The loop owns the controllers and a store subscription. Commands from the
//! front end become intents; store changes become view-model updates. A
//! location change re-runs the article controller, which fetches only when
//! the search or the author changed.

use conduit_application::{
    AppState, ArticleListController, CommentsController, Dispatcher, Intent,
};
use conduit_domain::ListQuery;
use tokio::sync::{mpsc, watch};

use crate::bridge::{UiCommand, UiUpdate};
use crate::state::{ArticleListModel, CommentsModel};

/// The article list window.
pub struct ListWindow<D> {
    dispatcher: D,
    articles: ArticleListController<D>,
    comments: CommentsController<D>,
    state: watch::Receiver<AppState>,
    updates: mpsc::UnboundedSender<UiUpdate>,
    page_limit: u32,
    shown: Shown,
}

/// What was last sent to the front end.
#[derive(Default)]
struct Shown {
    url: Option<String>,
    articles: Option<ArticleListModel>,
    comments: Option<CommentsModel>,
}

impl<D: Dispatcher + Clone> ListWindow<D> {
    /// Creates a window reading `state` and dispatching through `dispatcher`.
    pub fn new(
        dispatcher: D,
        state: watch::Receiver<AppState>,
        updates: mpsc::UnboundedSender<UiUpdate>,
        page_limit: u32,
    ) -> Self {
        Self {
            articles: ArticleListController::new(dispatcher.clone()),
            comments: CommentsController::new(dispatcher.clone()),
            dispatcher,
            state,
            updates,
            page_limit,
            shown: Shown::default(),
        }
    }

    /// Mounts the list for the current location and publishes the first render.
    pub fn mount(&mut self) {
        let location = self.state.borrow_and_update().location.clone();
        self.articles.mount(&location.search, &location.route_params());
        self.publish();
    }

    /// Handles one front-end command.
    pub fn handle_command(&mut self, command: UiCommand) {
        tracing::debug!(?command, "ui command");
        match command {
            UiCommand::Navigate { url } => self.dispatcher.dispatch(Intent::Navigate { url }),
            UiCommand::PageSelected { selected } => {
                self.articles.select_page(selected);
            }
            UiCommand::OpenComments { slug } => {
                self.comments.receive(&slug);
            }
        }
    }

    /// Reacts to a store change.
    pub fn handle_state_change(&mut self) {
        let location = self.state.borrow_and_update().location.clone();
        self.articles.receive_location(&location);
        self.publish();
    }

    /// Sends updates for everything that differs from what was last shown.
    ///
    /// Returns false once the front end has gone away.
    fn publish(&mut self) -> bool {
        let state = self.state.borrow().clone();
        let mut updates = Vec::new();

        let url = state.location.href();
        if self.shown.url.as_ref() != Some(&url) {
            self.shown.url = Some(url.clone());
            updates.push(UiUpdate::LocationChanged { url });
        }

        let query = ListQuery::from_location(&state.location);
        let articles = ArticleListModel::build(&state.articles, &query, self.page_limit);
        if self.shown.articles.as_ref() != Some(&articles) {
            self.shown.articles = Some(articles.clone());
            updates.push(UiUpdate::ArticlesChanged(articles));
        }

        if !state.comments.fetch.is_idle() {
            let comments = CommentsModel::build(&state.comments);
            if self.shown.comments.as_ref() != Some(&comments) {
                self.shown.comments = Some(comments.clone());
                updates.push(UiUpdate::CommentsChanged(comments));
            }
        }

        updates
            .into_iter()
            .all(|update| self.updates.send(update).is_ok())
    }

    /// Runs until the command channel closes, the store goes away or the
    /// front end stops listening.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<UiCommand>) {
        self.mount();
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                changed = self.state.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.handle_state_change();
                    if self.updates.is_closed() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("window loop stopped");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use conduit_application::{Action, Store, intent_channel};
    use conduit_domain::{ArticlePage, Location};
    use pretty_assertions::assert_eq;

    fn drain<T>(receiver: &mut mpsc::UnboundedReceiver<T>) -> Vec<T> {
        let mut items = Vec::new();
        while let Ok(item) = receiver.try_recv() {
            items.push(item);
        }
        items
    }

    fn store_at(url: &str) -> Store {
        Store::new(AppState {
            location: Location::parse(url),
            ..AppState::default()
        })
    }

    #[test]
    fn test_mount_fetches_and_publishes() {
        let store = store_at("/author/@john_doe?favorited");
        let (intents, mut intent_rx) = intent_channel();
        let (updates, mut update_rx) = mpsc::unbounded_channel();
        let mut window = ListWindow::new(intents, store.subscribe(), updates, 10);

        window.mount();

        assert_eq!(
            drain(&mut intent_rx),
            vec![Intent::FetchFavoritedByAuthor {
                page: 1,
                username: "@john_doe".to_string()
            }]
        );
        let updates = drain(&mut update_rx);
        assert_eq!(
            updates[0],
            UiUpdate::LocationChanged {
                url: "/author/@john_doe?favorited".to_string()
            }
        );
        assert!(matches!(&updates[1], UiUpdate::ArticlesChanged(m) if m.content.is_loading()));
    }

    #[test]
    fn test_unrelated_change_does_not_refetch() {
        let store = store_at("/?page=2");
        let (intents, mut intent_rx) = intent_channel();
        let (updates, mut update_rx) = mpsc::unbounded_channel();
        let mut window = ListWindow::new(intents, store.subscribe(), updates, 10);
        window.mount();
        drain(&mut intent_rx);
        drain(&mut update_rx);

        store.apply(Action::ArticlesLoaded(ArticlePage::default()));
        window.handle_state_change();

        assert!(drain(&mut intent_rx).is_empty());
        let updates = drain(&mut update_rx);
        assert_eq!(updates.len(), 1);
        assert!(matches!(&updates[0], UiUpdate::ArticlesChanged(m) if !m.content.is_loading()));
    }

    #[test]
    fn test_location_change_refetches() {
        let store = store_at("/");
        let (intents, mut intent_rx) = intent_channel();
        let (updates, _update_rx) = mpsc::unbounded_channel();
        let mut window = ListWindow::new(intents, store.subscribe(), updates, 10);
        window.mount();
        drain(&mut intent_rx);

        store.apply(Action::Navigated(Location::parse("/?tag=rust")));
        window.handle_state_change();

        assert_eq!(
            drain(&mut intent_rx),
            vec![Intent::FetchAll {
                page: 1,
                tag: Some("rust".to_string())
            }]
        );
    }

    #[test]
    fn test_page_selected_fetches_then_navigates() {
        let store = store_at("/?tag=foo");
        let (intents, mut intent_rx) = intent_channel();
        let (updates, _update_rx) = mpsc::unbounded_channel();
        let mut window = ListWindow::new(intents, store.subscribe(), updates, 10);
        window.mount();
        drain(&mut intent_rx);

        window.handle_command(UiCommand::PageSelected { selected: 1 });

        assert_eq!(
            drain(&mut intent_rx),
            vec![
                Intent::FetchAll {
                    page: 2,
                    tag: Some("foo".to_string())
                },
                Intent::Navigate {
                    url: "/?tag=foo&page=2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_comments_published_once_requested() {
        let store = store_at("/");
        let (intents, mut intent_rx) = intent_channel();
        let (updates, mut update_rx) = mpsc::unbounded_channel();
        let mut window = ListWindow::new(intents, store.subscribe(), updates, 10);
        window.mount();
        drain(&mut intent_rx);
        drain(&mut update_rx);

        window.handle_command(UiCommand::OpenComments {
            slug: "hello".to_string(),
        });
        assert_eq!(
            drain(&mut intent_rx),
            vec![Intent::FetchComments {
                slug: "hello".to_string()
            }]
        );

        store.apply(Action::CommentsLoaded(vec![]));
        window.handle_state_change();
        let updates = drain(&mut update_rx);
        assert!(matches!(&updates[..], [UiUpdate::CommentsChanged(_)]));
    }
}
