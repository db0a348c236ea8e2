//! Articles API port

use std::future::Future;

use conduit_domain::{ArticleFilter, ArticlePage, Comment};

use crate::ApplicationResult;

/// Port for reading articles and comments from the Conduit API.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait ArticlesApi: Send + Sync {
    /// Fetches one page of articles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, a non-success status or an undecodable body.
    fn list_articles(
        &self,
        filter: &ArticleFilter,
    ) -> impl Future<Output = ApplicationResult<ArticlePage>> + Send;

    /// Fetches all comments of an article.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ArticlesApi::list_articles`].
    fn list_comments(
        &self,
        slug: &str,
    ) -> impl Future<Output = ApplicationResult<Vec<Comment>>> + Send;
}
