//! UI Bridge Module
//!
//! Defines the communication protocol between a front end and the
//! window loop running on the Tokio runtime.

use crate::state::{ArticleListModel, CommentsModel};

/// Commands sent from the front end to the window loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// User followed a link or typed an address.
    Navigate { url: String },

    /// User clicked a paginator entry (zero-based index).
    PageSelected { selected: u32 },

    /// User opened an article; its comments should be shown.
    OpenComments { slug: String },
}

/// Updates sent from the window loop to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// The address bar changed.
    LocationChanged { url: String },

    /// The article list must be re-rendered.
    ArticlesChanged(ArticleListModel),

    /// The comment section must be re-rendered.
    CommentsChanged(CommentsModel),
}
