//! Articles API implementation using reqwest.
//!
//! This adapter implements the `ArticlesApi` port against the Conduit REST
//! API. It handles all HTTP communication for the application.

use std::time::Duration;

use conduit_application::ports::ArticlesApi;
use conduit_application::{ApplicationError, ApplicationResult};
use conduit_domain::{ArticleFilter, ArticlePage, ClientSettings, Comment};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /articles`.
#[derive(Debug, Serialize)]
struct ArticlesQuery<'a> {
    limit: u32,
    offset: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    favorited: Option<&'a str>,
}

impl<'a> From<&'a ArticleFilter> for ArticlesQuery<'a> {
    fn from(filter: &'a ArticleFilter) -> Self {
        Self {
            limit: filter.limit,
            offset: filter.offset(),
            tag: filter.tag.as_deref(),
            author: filter.author.as_deref(),
            favorited: filter.favorited_by.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommentsEnvelope {
    comments: Vec<Comment>,
}

/// HTTP client for the Conduit API using reqwest.
///
/// Wraps `reqwest::Client` and implements the `ArticlesApi` port from the
/// application layer.
#[derive(Debug, Clone)]
pub struct ReqwestArticlesApi {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
}

impl ReqwestArticlesApi {
    /// Creates a client for the API described by `settings`.
    ///
    /// Default configuration:
    /// - Request timeout: `settings.request_timeout_ms`
    /// - Follow redirects: up to 10
    /// - User-Agent: "Conduit/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be created.
    pub fn new(settings: &ClientSettings) -> ApplicationResult<Self> {
        let base_url = settings.api_url()?;
        let client = Client::builder()
            .user_agent(concat!("Conduit/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        Ok(Self::with_client(client, base_url, settings.request_timeout_ms))
    }

    /// Creates a client around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, timeout_ms: u64) -> Self {
        Self {
            client,
            base_url,
            timeout_ms,
        }
    }

    /// Appends path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> ApplicationResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApplicationError::Domain(conduit_domain::DomainError::InvalidUrl(
                    self.base_url.to_string(),
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL of one page of articles.
    fn articles_url(&self, filter: &ArticleFilter) -> ApplicationResult<Url> {
        let mut url = self.endpoint(&["articles"])?;
        let query = serde_urlencoded::to_string(ArticlesQuery::from(filter))
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        url.set_query(Some(&query));
        Ok(url)
    }

    /// URL of the comments of an article.
    fn comments_url(&self, slug: &str) -> ApplicationResult<Url> {
        self.endpoint(&["articles", slug, "comments"])
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApplicationResult<T> {
        tracing::debug!(%url, "GET");
        let path = url.path().to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApplicationError::NotFound(path));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .filter(|body| !body.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            return Err(ApplicationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms))?;
        serde_json::from_slice(&body).map_err(|e| ApplicationError::Decode(e.to_string()))
    }

    /// Maps reqwest errors to application errors.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> ApplicationError {
        if error.is_timeout() {
            return ApplicationError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            return ApplicationError::Http(format!("could not connect to {host}: {error}"));
        }

        if error.is_redirect() {
            return ApplicationError::Http("too many redirects (max 10)".to_string());
        }

        if error.is_decode() {
            return ApplicationError::Decode(error.to_string());
        }

        ApplicationError::Http(error.to_string())
    }
}

impl ArticlesApi for ReqwestArticlesApi {
    async fn list_articles(&self, filter: &ArticleFilter) -> ApplicationResult<ArticlePage> {
        let url = self.articles_url(filter)?;
        self.get_json(url).await
    }

    async fn list_comments(&self, slug: &str) -> ApplicationResult<Vec<Comment>> {
        let url = self.comments_url(slug)?;
        let envelope: CommentsEnvelope = self.get_json(url).await?;
        Ok(envelope.comments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn api(base: &str) -> ReqwestArticlesApi {
        let settings = ClientSettings {
            api_base_url: base.to_string(),
            ..ClientSettings::default()
        };
        ReqwestArticlesApi::new(&settings).expect("client builds")
    }

    #[test]
    fn test_articles_url_unfiltered() {
        let url = api("https://example.com/api")
            .articles_url(&ArticleFilter::page(1, 10))
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/articles?limit=10&offset=0");
    }

    #[test]
    fn test_articles_url_filters() {
        let api = api("https://example.com/api/");
        let url = api
            .articles_url(&ArticleFilter::page(3, 10).with_tag("rust lang"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/articles?limit=10&offset=20&tag=rust+lang"
        );

        let url = api
            .articles_url(&ArticleFilter::page(1, 5).with_favorited_by("@john_doe"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/articles?limit=5&offset=0&favorited=%40john_doe"
        );

        let url = api
            .articles_url(&ArticleFilter::page(2, 5).with_author("jane"))
            .unwrap();
        assert_eq!(url.query(), Some("limit=5&offset=5&author=jane"));
    }

    #[test]
    fn test_comments_url_escapes_slug() {
        let url = api("https://example.com/api").comments_url("a b/c").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/articles/a%20b%2Fc/comments");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let settings = ClientSettings {
            api_base_url: "nope".to_string(),
            ..ClientSettings::default()
        };
        assert!(matches!(
            ReqwestArticlesApi::new(&settings),
            Err(ApplicationError::Domain(_))
        ));
    }

    #[test]
    fn test_comments_envelope() {
        let json = r#"{"comments": [{
            "id": 1,
            "body": "hi",
            "createdAt": "2017-10-28T10:00:00.000Z",
            "updatedAt": "2017-10-28T10:00:00.000Z",
            "author": {"username": "jane"}
        }]}"#;
        let envelope: CommentsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.comments[0].author.username, "jane");
    }
}
