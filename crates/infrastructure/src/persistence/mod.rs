//! File-based persistence adapters.

mod settings_repository;

pub use settings_repository::{
    API_URL_ENV, PAGE_LIMIT_ENV, SettingsError, SettingsRepository, apply_overrides,
};
