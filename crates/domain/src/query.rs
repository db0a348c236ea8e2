//! Query string types

use std::borrow::Cow;
use std::fmt;

use url::form_urlencoded;

/// A single `key[=value]` fragment of a query string.
///
/// Values are kept exactly as they appeared in the address bar so that a
/// rebuilt URL carries them through untouched. A fragment without `=` is a
/// bare flag and has no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The raw parameter value, `None` for a bare flag
    pub value: Option<String>,
}

impl QueryParam {
    /// Creates a `key=value` parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a bare flag parameter such as `favorited`.
    #[must_use]
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// The percent-decoded key, as a form decoder would read it.
    ///
    /// `%70age` and `page` name the same parameter.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        form_urlencoded::parse(self.key.as_bytes())
            .next()
            .map_or(Cow::Borrowed(""), |(name, _)| name)
    }

    /// Parses one fragment. Returns `None` for fragments without a key.
    fn parse(fragment: &str) -> Option<Self> {
        let param = match fragment.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self::flag(fragment),
        };
        (!param.key.is_empty()).then_some(param)
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.key),
            None => f.write_str(&self.key),
        }
    }
}

/// An ordered query string.
///
/// Order is preserved left to right. Empty fragments (`&&`) and
/// fragments with an empty key (`=x`) are dropped while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    items: Vec<QueryParam>,
}

impl QueryString {
    /// Creates an empty query string.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Parses a search string, with or without its leading `?`.
    #[must_use]
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        raw.split('&').filter_map(QueryParam::parse).collect()
    }

    /// Appends a parameter.
    pub fn push(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Removes every parameter whose decoded name is `key`.
    pub fn remove(&mut self, key: &str) {
        self.items.retain(|p| p.name() != key);
    }

    /// Returns true if any parameter is named `key`, flag or not.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|p| p.name() == key)
    }

    /// Returns the raw value of the first parameter named `key`.
    ///
    /// Names are compared decoded. Bare flags yield an empty string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|p| p.name() == key)
            .map(|p| p.value.as_deref().unwrap_or_default())
    }

    /// Returns all parameters in order.
    #[must_use]
    pub fn all(&self) -> &[QueryParam] {
        &self.items
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Renders as a search string: `?a=1&b`, or empty when there are no parameters.
impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, param) in self.items.iter().enumerate() {
            f.write_str(if index == 0 { "?" } else { "&" })?;
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl FromIterator<QueryParam> for QueryString {
    fn from_iter<T: IntoIterator<Item = QueryParam>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
