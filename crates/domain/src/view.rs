//! Display state resolution for list views.

/// The mutually exclusive render outcomes of a list view.
#[derive(Debug, PartialEq, Eq)]
pub enum Display<'a, T> {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    ErrorView,
    /// The last fetch succeeded with no items.
    EmptyView,
    /// The items to render, in order.
    ListView(&'a [T]),
}

impl<T> Display<'_, T> {
    /// Short name of the display state, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::ErrorView => "error",
            Self::EmptyView => "empty",
            Self::ListView(_) => "list",
        }
    }
}

/// Decides which display state applies.
///
/// Fetching wins over everything, an error wins over emptiness.
#[must_use]
pub const fn resolve_view<'a, T>(
    fetching: bool,
    error: Option<&str>,
    items: &'a [T],
) -> Display<'a, T> {
    if fetching {
        Display::Loading
    } else if error.is_some() {
        Display::ErrorView
    } else if items.is_empty() {
        Display::EmptyView
    } else {
        Display::ListView(items)
    }
}
