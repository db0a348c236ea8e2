//! Intent dispatch port

use tokio::sync::mpsc;

use crate::intent::Intent;

/// Sending half of the intent channel.
pub type IntentSender = mpsc::UnboundedSender<Intent>;

/// Receiving half of the intent channel.
pub type IntentReceiver = mpsc::UnboundedReceiver<Intent>;

/// Creates the channel views dispatch intents through.
#[must_use]
pub fn intent_channel() -> (IntentSender, IntentReceiver) {
    mpsc::unbounded_channel()
}

/// Port through which views hand off intents.
///
/// Dispatch is fire-and-forget: it never blocks and never reports the
/// outcome. Results come back as store updates.
pub trait Dispatcher: Send + Sync {
    /// Hands off one intent.
    fn dispatch(&self, intent: Intent);
}

impl Dispatcher for IntentSender {
    fn dispatch(&self, intent: Intent) {
        if let Err(mpsc::error::SendError(intent)) = self.send(intent) {
            tracing::warn!(?intent, "intent loop has stopped, dropping intent");
        }
    }
}

impl<D: Dispatcher + ?Sized> Dispatcher for &D {
    fn dispatch(&self, intent: Intent) {
        (**self).dispatch(intent);
    }
}
