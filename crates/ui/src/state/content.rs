//! Content slot shared by list views.

use conduit_domain::Display;

/// Colour of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertColor {
    /// Informational, e.g. nothing to show.
    Info,
    /// Something went wrong.
    Danger,
}

/// An alert banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Banner colour.
    pub color: AlertColor,
    /// Banner text.
    pub text: String,
}

impl Alert {
    /// An informational alert.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            color: AlertColor::Info,
            text: text.into(),
        }
    }

    /// An error alert.
    #[must_use]
    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            color: AlertColor::Danger,
            text: text.into(),
        }
    }
}

/// What a list view shows in its content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<T> {
    /// Spinner.
    Loader,
    /// Error or empty banner.
    Alert(Alert),
    /// The populated list.
    Items(T),
}

impl<T> Content<T> {
    /// Maps a display state to content.
    ///
    /// `empty` and `error` are the banner texts; `items` builds the list body.
    pub fn from_display<I>(
        display: Display<'_, I>,
        empty: &str,
        error: &str,
        items: impl FnOnce(&[I]) -> T,
    ) -> Self {
        match display {
            Display::Loading => Self::Loader,
            Display::ErrorView => Self::Alert(Alert::danger(error)),
            Display::EmptyView => Self::Alert(Alert::info(empty)),
            Display::ListView(list) => Self::Items(items(list)),
        }
    }

    /// Returns true while the loader is shown.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loader)
    }
}
