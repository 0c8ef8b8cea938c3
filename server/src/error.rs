//! Error types for document store operations.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure modes of the document store adapter.
///
/// Handlers map every variant to a generic 500 response; the variant detail
/// is logged, never serialized to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Document not found in its collection.
    #[error("document not found")]
    NotFound,

    /// A document failed to serialize or deserialize.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The store backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns `true` if this error indicates a missing document rather
    /// than a backend failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
