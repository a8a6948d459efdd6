//! Error types for kaq-core.

use crate::types::ApiId;

/// Errors raised while generating a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryGenError {
    /// The table cannot supply a usable field list.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An API identifier string was not of the form `group/kind`.
    #[error("invalid api id {0:?}: expected group/kind")]
    InvalidApiId(String),
}

/// Errors raised while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Two `[[layers]]` entries share the same `(group, kind)`.
    #[error("duplicate field set layer for api {0}")]
    DuplicateLayer(ApiId),

    #[error("failed to write default configuration: {0}")]
    Io(#[from] std::io::Error),
}
