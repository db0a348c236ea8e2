//! Plain-text rendering of view models, for terminals and logs.

use std::fmt::Write;

use crate::state::{
    Alert, AlertColor, ArticleCard, ArticleListModel, CommentCard, CommentsModel, Content,
    Pagination,
};

const LOADER: &str = "Loading...";

/// Renders the article list.
#[must_use]
pub fn render_articles(model: &ArticleListModel) -> String {
    let mut out = String::new();
    if let Some(title) = &model.title {
        let _ = writeln!(out, "# {title}\n");
    }
    match &model.content {
        Content::Loader => out.push_str(LOADER),
        Content::Alert(alert) => out.push_str(&render_alert(alert)),
        Content::Items(body) => {
            for card in &body.cards {
                out.push_str(&render_article_card(card));
                out.push('\n');
            }
            out.push_str(&render_pagination(body.pagination));
        }
    }
    out.push('\n');
    out
}

/// Renders the comment section.
#[must_use]
pub fn render_comments(model: &CommentsModel) -> String {
    let mut out = String::new();
    match &model.content {
        Content::Loader => out.push_str(LOADER),
        Content::Alert(alert) => out.push_str(&render_alert(alert)),
        Content::Items(cards) => {
            for card in cards {
                out.push_str(&render_comment_card(card));
            }
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_alert(alert: &Alert) -> String {
    let label = match alert.color {
        AlertColor::Info => "info",
        AlertColor::Danger => "error",
    };
    format!("[{label}] {}", alert.text)
}

fn render_article_card(card: &ArticleCard) -> String {
    let heart = if card.favorited { '♥' } else { '♡' };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} · {}  {heart} {}",
        card.author.username, card.created_at, card.favorites_count
    );
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "  {}", card.description);
    let _ = write!(out, "  Read More: {}", card.href);
    if !card.tags.is_empty() {
        let _ = write!(out, "  [{}]", card.tags.join(", "));
    }
    out.push('\n');
    out
}

fn render_comment_card(card: &CommentCard) -> String {
    format!(
        "{}\n  -- {} · {}\n",
        card.body, card.author.username, card.created_at
    )
}

/// Renders `< 1 2 [3] 4 ... 50 >` style pagination.
fn render_pagination(pagination: Pagination) -> String {
    let count = pagination.page_count;
    if count <= 1 {
        return String::new();
    }
    let active = u64::from(pagination.force_page);
    let mut out = String::from("<");
    let mut last_shown: Option<u64> = None;
    for index in 0..count {
        let near_edge = index < 3 || index + 3 >= count;
        let near_active = index + 3 > active && index < active + 3;
        if !(near_edge || near_active) {
            continue;
        }
        if last_shown.is_some_and(|last| index > last + 1) {
            out.push_str(" ...");
        }
        if index == active {
            let _ = write!(out, " [{}]", index + 1);
        } else {
            let _ = write!(out, " {}", index + 1);
        }
        last_shown = Some(index);
    }
    out.push_str(" >");
    out
}
