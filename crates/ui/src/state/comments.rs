//! View model of an article's comments.

use conduit_domain::{Comment, ListState, Profile, display_date};

use super::content::Content;

/// Banner shown when an article has no comments.
pub const NO_COMMENTS: &str = "No Comments Found";

/// Banner shown when comments could not be fetched.
pub const COMMENTS_ERROR: &str = "Could not load comments.";

/// One comment card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCard {
    /// Comment identifier.
    pub id: u64,
    /// Comment text.
    pub body: String,
    /// Author shown in the footer.
    pub author: Profile,
    /// Creation date, e.g. `Sat Oct 28 2017`.
    pub created_at: String,
}

impl From<&Comment> for CommentCard {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            body: comment.body.clone(),
            author: comment.author.clone(),
            created_at: display_date(&comment.created_at),
        }
    }
}

/// Everything the comment section renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsModel {
    /// Content area.
    pub content: Content<Vec<CommentCard>>,
}

impl CommentsModel {
    /// Builds the model from store state.
    #[must_use]
    pub fn build(list: &ListState<Comment>) -> Self {
        Self {
            content: Content::from_display(list.display(), NO_COMMENTS, COMMENTS_ERROR, |comments| {
                comments.iter().map(CommentCard::from).collect()
            }),
        }
    }
}
