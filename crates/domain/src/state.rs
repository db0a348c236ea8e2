//! Fetch state types for list views.
//!
//! This module defines the state machine a list goes through while its items
//! are fetched, so that views can show the appropriate feedback.

use serde::{Deserialize, Serialize};

use crate::view::{Display, resolve_view};

/// Represents the state of one list fetch.
///
/// - `Idle`: nothing requested yet
/// - `Loading`: fetch in flight, show a loader
/// - `Error`: fetch failed, show the error banner
/// - `Success`: items received, possibly none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
#[derive(Default)]
pub enum FetchState<T> {
    /// No fetch has been started yet.
    #[default]
    Idle,

    /// A fetch is in progress.
    Loading,

    /// The last fetch failed.
    Error {
        /// Human-readable error message.
        message: String,
    },

    /// The last fetch completed.
    Success {
        /// Items in display order.
        items: Vec<T>,
    },
}

impl<T> FetchState<T> {
    /// Creates an Error state.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Creates a Success state.
    #[must_use]
    pub const fn success(items: Vec<T>) -> Self {
        Self::Success { items }
    }

    /// Returns true if the state is Idle.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a fetch is in progress.
    ///
    /// A list that was never fetched counts as fetching: every list view
    /// dispatches its first fetch as soon as it is mounted.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Returns the error message if the last fetch failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Returns the fetched items, empty unless in Success state.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Success { items } => items,
            _ => &[],
        }
    }

    /// Resolves which display state applies.
    #[must_use]
    pub fn display(&self) -> Display<'_, T> {
        resolve_view(self.is_fetching(), self.error_message(), self.items())
    }
}

/// Fetch state of a paginated list plus the server-side item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState<T> {
    /// State of the current fetch.
    pub fetch: FetchState<T>,
    /// Total number of items across all pages, as last reported.
    pub total_count: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            fetch: FetchState::Idle,
            total_count: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Marks a fetch as started. The previous count is kept for the paginator.
    pub fn start(&mut self) {
        self.fetch = FetchState::Loading;
    }

    /// Stores a completed fetch.
    pub fn succeed(&mut self, items: Vec<T>, total_count: u64) {
        self.fetch = FetchState::success(items);
        self.total_count = total_count;
    }

    /// Stores a failed fetch.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.fetch = FetchState::error(message);
    }

    /// Resolves which display state applies.
    #[must_use]
    pub fn display(&self) -> Display<'_, T> {
        self.fetch.display()
    }
}
