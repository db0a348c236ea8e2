//! Client settings domain model.
//!
//! Defines where the client talks to and how it pages through lists.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::pagination::BASE_LIMIT;
use crate::validation::required;

/// Settings for the Conduit client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the API, e.g. `https://conduit.productionready.io/api`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Articles requested per page.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "https://conduit.productionready.io/api".to_string()
}

const fn default_page_limit() -> u32 {
    BASE_LIMIT
}

const fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_limit: default_page_limit(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ClientSettings {
    /// Parses the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL is malformed or not http(s).
    pub fn api_url(&self) -> DomainResult<Url> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.api_base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DomainError::InvalidUrl(format!(
                "unsupported scheme {other}: {}",
                self.api_base_url
            ))),
        }
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or invalid API URL, a zero page limit
    /// or a zero timeout.
    pub fn validate(&self) -> DomainResult<()> {
        required(self.api_base_url.trim()).map_err(|source| DomainError::InvalidField {
            field: "api_base_url",
            source,
        })?;
        self.api_url()?;
        if self.page_limit == 0 {
            return Err(DomainError::InvalidSettings(
                "page_limit must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(DomainError::InvalidSettings(
                "request_timeout_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
