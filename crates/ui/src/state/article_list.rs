//! View model of the article list.

use conduit_domain::{
    Article, ListQuery, ListState, Profile, display_date, forced_page_index, page_count,
};

use super::content::Content;

/// Banner shown when a page has no articles.
pub const NO_ARTICLES: &str = "No articles are here... yet.";

/// Banner shown when articles could not be fetched.
pub const ARTICLES_ERROR: &str = "Could not load articles. Please try again later.";

/// Document title of the unfiltered list.
pub const ARTICLES_TITLE: &str = "Articles";

/// One article card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    /// Author shown in the card header.
    pub author: Profile,
    /// Creation date, e.g. `Fri Oct 27 2017`.
    pub created_at: String,
    /// Favorite count on the heart button.
    pub favorites_count: u64,
    /// Whether the heart button is active.
    pub favorited: bool,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Target of the `Read More` link.
    pub href: String,
    /// Tags.
    pub tags: Vec<String>,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            author: article.author.clone(),
            created_at: display_date(&article.created_at),
            favorites_count: article.favorites_count,
            favorited: article.favorited,
            title: article.title.clone(),
            description: article.description.clone(),
            href: format!("/article/{}", article.slug),
            tags: article.tag_list.clone(),
        }
    }
}

/// Paginator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based index of the active page.
    pub force_page: u32,
    /// Number of pages.
    pub page_count: u64,
}

/// Cards plus paginator for a populated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListBody {
    /// Cards in display order.
    pub cards: Vec<ArticleCard>,
    /// Paginator.
    pub pagination: Pagination,
}

/// Everything the article list renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListModel {
    /// Document title; only the unfiltered list sets one.
    pub title: Option<String>,
    /// Content area.
    pub content: Content<ArticleListBody>,
}

impl ArticleListModel {
    /// Builds the model from store state and the filters in the address bar.
    #[must_use]
    pub fn build(list: &ListState<Article>, query: &ListQuery, page_limit: u32) -> Self {
        let pagination = Pagination {
            force_page: forced_page_index(query.page),
            page_count: page_count(list.total_count, page_limit),
        };
        let content =
            Content::from_display(list.display(), NO_ARTICLES, ARTICLES_ERROR, |articles| {
                ArticleListBody {
                    cards: articles.iter().map(ArticleCard::from).collect(),
                    pagination,
                }
            });
        Self {
            title: query.username.is_none().then(|| ARTICLES_TITLE.to_string()),
            content,
        }
    }
}
