//! View models derived from store state.

mod article_list;
mod comments;
mod content;

pub use article_list::{
    ARTICLES_ERROR, ARTICLES_TITLE, ArticleCard, ArticleListBody, ArticleListModel, NO_ARTICLES,
    Pagination,
};
pub use comments::{COMMENTS_ERROR, CommentCard, CommentsModel, NO_COMMENTS};
pub use content::{Alert, AlertColor, Content};
