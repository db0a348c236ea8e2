//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod articles_api;
mod dispatcher;

pub use articles_api::ArticlesApi;
pub use dispatcher::{Dispatcher, IntentReceiver, IntentSender, intent_channel};
