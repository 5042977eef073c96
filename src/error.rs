//! Error handling for the store facade
//!
//! Store-level failures are surfaced unchanged: every SeaORM error is wrapped
//! verbatim in [`StoreError::Database`] and can be recovered by matching on it.
//! Nothing is retried or translated at this layer.

use thiserror::Error;

/// Result type alias for the store facade
pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for the store facade
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database errors, carried through from SeaORM unchanged
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (configuration file loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
