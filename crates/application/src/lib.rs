//! Conduit Application - Intents, store and use cases
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the API and intent dispatch)
//! - The store, the single writer of fetch state
//! - Controllers deciding which fetch a list view needs
//! - Use case orchestration and the intent loop
//! - Application-level error handling

pub mod error;
pub mod intent;
pub mod list_controller;
pub mod ports;
pub mod runtime;
pub mod store;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use intent::Intent;
pub use list_controller::{ArticleListController, CommentsController, resolve_fetch_intent};
pub use ports::{ArticlesApi, Dispatcher, IntentReceiver, IntentSender, intent_channel};
pub use runtime::IntentLoop;
pub use store::{Action, AppState, Store, reduce};
pub use use_cases::{FetchArticles, FetchComments};
