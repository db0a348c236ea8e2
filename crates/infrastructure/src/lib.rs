//! Conduit Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings persistence.

pub mod adapters;
pub mod persistence;

pub use adapters::ReqwestArticlesApi;
pub use persistence::{SettingsError, SettingsRepository};
