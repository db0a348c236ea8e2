//! Domain error types

use thiserror::Error;

use crate::validation::ValidationError;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A settings value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A field failed validation.
    #[error("{field}: {source}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// What was wrong with it.
        source: ValidationError,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
