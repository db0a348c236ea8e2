//! Conduit Domain - Core client types
//!
//! This crate defines the domain model of the Conduit client: articles and
//! comments, list filters, pagination URLs and list display states.
//! All types here are pure Rust with no I/O dependencies.

pub mod article;
pub mod error;
pub mod list_query;
pub mod location;
pub mod pagination;
pub mod query;
pub mod settings;
pub mod state;
pub mod validation;
pub mod view;

pub use article::{Article, ArticleFilter, ArticlePage, Comment, Profile, display_date};
pub use error::{DomainError, DomainResult};
pub use list_query::ListQuery;
pub use location::{Location, RouteParams};
pub use pagination::{
    BASE_LIMIT, build_page_url, forced_page_index, page_count, page_from_selected, parse_page,
};
pub use query::{QueryParam, QueryString};
pub use settings::ClientSettings;
pub use state::{FetchState, ListState};
pub use validation::ValidationError;
pub use view::{Display, resolve_view};
