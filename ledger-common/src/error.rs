//! Common error types for Ledger
//!
//! Defines service-wide error types using thiserror for clear error
//! propagation. Store failures are classified where they occur: the sqlx
//! cause is logged there and only a fixed generic message is carried in
//! `Error::Database`, so raw driver text never reaches API callers.

use thiserror::Error;

/// Common result type for Ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Ledger services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Datastore connection resolution failed (fatal at startup)
    #[error("Connection resolution error: {0}")]
    ConnectionResolution(String),

    /// Database operation failed; carries a generic message only
    #[error("{0}")]
    Database(String),

    /// Requested resource not found (zero rows affected)
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP server errors
    #[error("HTTP server error: {0}")]
    Http(String),
}
