//! Client settings persistence.
//!
//! Stores client settings in the platform-specific config directory:
//! - Linux: ~/.config/conduit/settings.json
//! - macOS: ~/Library/Application Support/conduit/settings.json
//! - Windows: %APPDATA%/conduit/settings.json
//!
//! Environment variables override stored values:
//! - `CONDUIT_API_URL`: API base URL
//! - `CONDUIT_PAGE_LIMIT`: articles per page

use std::path::{Path, PathBuf};

use conduit_domain::{ClientSettings, DomainError};
use tokio::fs;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CONDUIT_API_URL";

/// Environment variable overriding the page limit.
pub const PAGE_LIMIT_ENV: &str = "CONDUIT_PAGE_LIMIT";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for `ClientSettings`.
    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    /// An override or stored value is unusable.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for client settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository using the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_settings_path(),
        }
    }

    /// Creates a repository reading and writing `path`.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn default_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("conduit").join("settings.json"))
    }

    /// Returns the path this repository uses.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ClientSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ClientSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = serde_json::from_slice(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Loads settings, applies environment overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the final settings are invalid.
    pub async fn load_effective(&self) -> Result<ClientSettings, SettingsError> {
        let settings = self.load().await?;
        let settings = apply_overrides(settings, |key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings to disk as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no config directory or writing fails.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let mut content = serde_json::to_vec_pretty(settings)?;
        content.push(b'\n');
        fs::write(path, content).await?;
        Ok(())
    }
}

/// Applies overrides looked up by environment variable name.
///
/// # Errors
///
/// Returns an error if `CONDUIT_PAGE_LIMIT` is not a number.
pub fn apply_overrides(
    mut settings: ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
        settings.api_base_url = url;
    }
    if let Some(limit) = lookup(PAGE_LIMIT_ENV).filter(|v| !v.is_empty()) {
        settings.page_limit = limit.trim().parse().map_err(|_| {
            DomainError::InvalidSettings(format!("{PAGE_LIMIT_ENV} must be a number, got {limit}"))
        })?;
    }
    Ok(settings)
}
