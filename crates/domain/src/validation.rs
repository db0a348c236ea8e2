//! Client-side form field validators.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").ok());

/// A field validation failure. Display strings are shown next to the field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty.
    #[error("Required")]
    Required,

    /// The field is not an email address.
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Fails on an empty value.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] when `value` is empty.
pub const fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

/// Fails on a non-empty value that is not an email address.
///
/// Empty values pass; combine with [`required`] for mandatory fields.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] for a malformed address.
pub fn email(value: &str) -> Result<(), ValidationError> {
    let valid = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value));
    if value.is_empty() || valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(""), Err(ValidationError::Required));
        assert_eq!(required("x"), Ok(()));
        assert_eq!(ValidationError::Required.to_string(), "Required");
    }

    #[test]
    fn test_email_accepts_addresses() {
        assert_eq!(email("jane@example.com"), Ok(()));
        assert_eq!(email("JANE.DOE+blog@Mail.Example.ORG"), Ok(()));
    }

    #[test]
    fn test_email_rejects_malformed() {
        for value in ["jane", "jane@", "@example.com", "jane@example", "jane@example.museum"] {
            assert_eq!(email(value), Err(ValidationError::InvalidEmail), "{value}");
        }
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email address"
        );
    }

    #[test]
    fn test_email_empty_passes() {
        assert_eq!(email(""), Ok(()));
    }
}
