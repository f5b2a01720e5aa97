//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// Missing records are not errors; operations report them as `Option`
/// or `bool` results instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level failure (connectivity, server error, codec).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Identifier string is not a valid object id.
    #[error("malformed object id: {0}")]
    InvalidId(#[from] bson::oid::Error),
}
