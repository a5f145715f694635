//! Error types for the conversation store.

use thiserror::Error;

/// Conversation store error type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied argument was empty or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The backing database could not be reached or the operation failed.
    #[error("history store unavailable: {0}")]
    Unavailable(#[from] mongodb::error::Error),
    /// Message could not be encoded as a BSON document.
    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
    /// Unknown history store type requested from the factory.
    #[error("unsupported history store type: {0}")]
    UnsupportedBackend(String),
}

/// Convenience result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
