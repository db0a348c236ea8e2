//! Fetch and navigation intents.
//!
//! An intent describes what a view wants without performing any I/O. Views
//! hand intents to a [`crate::ports::Dispatcher`]; the [`crate::IntentLoop`]
//! turns them into API calls and store updates.

use conduit_domain::{ArticleFilter, ListQuery};

/// A request dispatched by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Fetch a page of all articles, optionally by tag.
    FetchAll {
        /// One-based page.
        page: u32,
        /// Tag filter.
        tag: Option<String>,
    },

    /// Fetch a page of articles written by an author.
    FetchByAuthor {
        /// One-based page.
        page: u32,
        /// Author username.
        username: String,
    },

    /// Fetch a page of articles an author favorited.
    FetchFavoritedByAuthor {
        /// One-based page.
        page: u32,
        /// Username whose favorites are listed.
        username: String,
    },

    /// Fetch the comments of an article.
    FetchComments {
        /// Article slug.
        slug: String,
    },

    /// Move the address bar to an in-app URL.
    Navigate {
        /// Path plus search, e.g. `/?page=2`.
        url: String,
    },
}

impl Intent {
    /// Picks the article fetch for a parsed list query.
    ///
    /// An author route with the `favorited` flag lists that author's
    /// favorites, an author route alone lists their articles, anything else
    /// lists all articles with the tag filter applied.
    #[must_use]
    pub fn for_list(query: &ListQuery) -> Self {
        match &query.username {
            Some(username) if query.favorited => Self::FetchFavoritedByAuthor {
                page: query.page,
                username: username.clone(),
            },
            Some(username) => Self::FetchByAuthor {
                page: query.page,
                username: username.clone(),
            },
            None => Self::FetchAll {
                page: query.page,
                tag: query.tag.clone(),
            },
        }
    }

    /// Server-side filter for article intents, `None` for the others.
    #[must_use]
    pub fn article_filter(&self, limit: u32) -> Option<ArticleFilter> {
        match self {
            Self::FetchAll { page, tag } => {
                let filter = ArticleFilter::page(*page, limit);
                Some(match tag {
                    Some(tag) => filter.with_tag(tag.clone()),
                    None => filter,
                })
            }
            Self::FetchByAuthor { page, username } => {
                Some(ArticleFilter::page(*page, limit).with_author(username.clone()))
            }
            Self::FetchFavoritedByAuthor { page, username } => {
                Some(ArticleFilter::page(*page, limit).with_favorited_by(username.clone()))
            }
            Self::FetchComments { .. } | Self::Navigate { .. } => None,
        }
    }

    /// Returns true if the intent triggers a fetch.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        !matches!(self, Self::Navigate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_domain::RouteParams;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_list_precedence() {
        let john = RouteParams::author("@john_doe");

        assert_eq!(
            Intent::for_list(&ListQuery::parse("?favorited&tag=x", &john)),
            Intent::FetchFavoritedByAuthor {
                page: 1,
                username: "@john_doe".to_string()
            }
        );
        assert_eq!(
            Intent::for_list(&ListQuery::parse("?page=2&tag=x", &john)),
            Intent::FetchByAuthor {
                page: 2,
                username: "@john_doe".to_string()
            }
        );
        assert_eq!(
            Intent::for_list(&ListQuery::parse("?favorited&tag=x", &RouteParams::default())),
            Intent::FetchAll {
                page: 1,
                tag: Some("x".to_string())
            }
        );
    }

    #[test]
    fn test_article_filter() {
        let all = Intent::FetchAll {
            page: 2,
            tag: Some("rust".to_string()),
        };
        assert_eq!(
            all.article_filter(10),
            Some(ArticleFilter::page(2, 10).with_tag("rust"))
        );

        let favorites = Intent::FetchFavoritedByAuthor {
            page: 1,
            username: "jane".to_string(),
        };
        assert_eq!(
            favorites.article_filter(5),
            Some(ArticleFilter::page(1, 5).with_favorited_by("jane"))
        );

        let navigate = Intent::Navigate {
            url: "/".to_string(),
        };
        assert_eq!(navigate.article_filter(10), None);
        assert!(!navigate.is_fetch());
    }
}
