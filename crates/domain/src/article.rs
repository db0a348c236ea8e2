//! Articles, comments and author profiles as served by the Conduit API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::page_offset;

/// Public profile of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique username.
    pub username: String,
    /// Free-form biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the current user follows this author.
    #[serde(default)]
    pub following: bool,
}

impl Profile {
    /// Creates a profile with only a username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            bio: None,
            image: None,
            following: false,
        }
    }
}

/// An article summary as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Markdown body, absent from some list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Tags in author order.
    #[serde(default)]
    pub tag_list: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Whether the current user favorited this article.
    #[serde(default)]
    pub favorited: bool,
    /// Number of users who favorited this article.
    #[serde(default)]
    pub favorites_count: u64,
    /// Author profile.
    pub author: Profile,
}

/// A comment on an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment identifier.
    pub id: u64,
    /// Comment text.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Comment author.
    pub author: Profile,
}

/// One page of articles plus the total across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    /// Articles on this page.
    pub articles: Vec<Article>,
    /// Total number of articles matching the filter.
    #[serde(default)]
    pub articles_count: u64,
}

/// Server-side filter for one page of articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    /// One-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Only articles with this tag.
    pub tag: Option<String>,
    /// Only articles written by this user.
    pub author: Option<String>,
    /// Only articles favorited by this user.
    pub favorited_by: Option<String>,
}

impl ArticleFilter {
    /// Creates an unfiltered page request.
    #[must_use]
    pub const fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            tag: None,
            author: None,
            favorited_by: None,
        }
    }

    /// Restricts to a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Restricts to an author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Restricts to articles favorited by a user.
    #[must_use]
    pub fn with_favorited_by(mut self, username: impl Into<String>) -> Self {
        self.favorited_by = Some(username.into());
        self
    }

    /// Offset of the first article of the page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        page_offset(self.page, self.limit)
    }
}

/// Formats a timestamp the way list cards show it, e.g. `Fri Oct 27 2017`.
#[must_use]
pub fn display_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARTICLE_JSON: &str = r#"{
        "author": {
            "bio": "ab cdadaf",
            "following": false,
            "image": "https://static.productionready.io/images/smiley-cyrus.jpg",
            "username": "trinhnguyen"
        },
        "title": "sample title",
        "description": "sample description",
        "createdAt": "2017-10-27T00:13:15.524Z",
        "updatedAt": "2017-10-27T00:13:15.524Z",
        "slug": "hello-world-31l68b",
        "favoritesCount": 1,
        "favorited": true,
        "tagList": ["dragons", "angularjs", "reactjs"]
    }"#;

    #[test]
    fn test_article_deserializes_from_api_shape() {
        let article: Article = serde_json::from_str(ARTICLE_JSON).expect("valid article");
        assert_eq!(article.slug, "hello-world-31l68b");
        assert_eq!(article.author.username, "trinhnguyen");
        assert_eq!(article.tag_list, vec!["dragons", "angularjs", "reactjs"]);
        assert_eq!(article.favorites_count, 1);
        assert!(article.favorited);
        assert_eq!(article.body, None);
        assert_eq!(display_date(&article.created_at), "Fri Oct 27 2017");
    }

    #[test]
    fn test_article_page_envelope() {
        let json = format!(r#"{{"articles": [{ARTICLE_JSON}], "articlesCount": 500}}"#);
        let page: ArticlePage = serde_json::from_str(&json).expect("valid page");
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles_count, 500);
    }

    #[test]
    fn test_comment_deserializes() {
        let json = r#"{
            "id": 7,
            "body": "Nice post",
            "createdAt": "2017-10-28T10:00:00.000Z",
            "updatedAt": "2017-10-28T10:00:00.000Z",
            "author": {"username": "jane", "bio": null, "image": null, "following": false}
        }"#;
        let comment: Comment = serde_json::from_str(json).expect("valid comment");
        assert_eq!(comment.id, 7);
        assert_eq!(comment.author, Profile::new("jane"));
    }

    #[test]
    fn test_filter_offset() {
        let filter = ArticleFilter::page(3, 10).with_tag("rust");
        assert_eq!(filter.offset(), 20);
        assert_eq!(filter.tag.as_deref(), Some("rust"));
        assert_eq!(ArticleFilter::page(1, 10).offset(), 0);
    }
}
