//! Conduit Client - Main Entry Point
//!
//! Wires settings, the HTTP adapter, the store and the window loop together,
//! opens one address and prints the list once it has loaded.

mod cli;

use std::sync::Arc;

use clap::Parser;
use conduit_application::{AppState, IntentLoop, Store, intent_channel};
use conduit_domain::{Location, build_page_url};
use conduit_infrastructure::{ReqwestArticlesApi, SettingsRepository};
use conduit_ui::{
    ArticleListModel, CommentsModel, ListWindow, UiCommand, UiUpdate, render_articles,
    render_comments,
};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut settings = SettingsRepository::new().load_effective().await?;
    if let Some(api) = &args.api {
        settings.api_base_url.clone_from(api);
        settings.validate()?;
    }
    tracing::info!(api = %settings.api_base_url, limit = settings.page_limit, "starting");

    let mut location = Location::parse(&args.url);
    if let Some(page) = args.page {
        let url = build_page_url(&location.search, &location.route_params(), page);
        location = Location::parse(&url);
    }

    let api = Arc::new(ReqwestArticlesApi::new(&settings)?);
    let store = Store::new(AppState {
        location,
        ..AppState::default()
    });

    let (intents, intent_rx) = intent_channel();
    tokio::spawn(IntentLoop::new(api, store.clone(), settings.page_limit).run(intent_rx));

    let (commands, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut updates) = mpsc::unbounded_channel();
    let window = ListWindow::new(intents, store.subscribe(), update_tx, settings.page_limit);
    tokio::spawn(window.run(command_rx));

    if let Some(slug) = &args.comments {
        commands.send(UiCommand::OpenComments { slug: slug.clone() })?;
    }

    let mut articles: Option<ArticleListModel> = None;
    let mut comments: Option<CommentsModel> = None;
    while let Some(update) = updates.recv().await {
        match update {
            UiUpdate::LocationChanged { url } => tracing::debug!(%url, "location"),
            UiUpdate::ArticlesChanged(model) if !model.content.is_loading() => {
                articles = Some(model);
            }
            UiUpdate::CommentsChanged(model) if !model.content.is_loading() => {
                comments = Some(model);
            }
            UiUpdate::ArticlesChanged(_) | UiUpdate::CommentsChanged(_) => {}
        }
        if articles.is_some() && (args.comments.is_none() || comments.is_some()) {
            break;
        }
    }

    if let Some(model) = &articles {
        print!("{}", render_articles(model));
    }
    if let Some(model) = &comments {
        println!();
        print!("{}", render_comments(model));
    }
    Ok(())
}
