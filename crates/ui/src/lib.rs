//! Conduit UI - User interface layer
//!
//! This crate provides the renderer-agnostic user interface of the Conduit
//! client: view models, the command/update bridge, the window loop that
//! connects them to the store, and a plain-text renderer.

pub mod bridge;
pub mod render;
pub mod state;
pub mod window;

pub use bridge::{UiCommand, UiUpdate};
pub use render::{render_articles, render_comments};
pub use state::{
    Alert, AlertColor, ArticleCard, ArticleListBody, ArticleListModel, CommentCard, CommentsModel,
    Content, Pagination,
};
pub use window::ListWindow;
