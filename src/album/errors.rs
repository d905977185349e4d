//! Album catalogue errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No album carries the requested id
    #[error("Album not found: {0}")]
    NotFound(String),

    /// Insert refused because the id is taken (strict policy only)
    #[error("Album already exists: {0}")]
    DuplicateId(String),

    /// A writer panicked while holding the collection lock
    #[error("Album store lock poisoned")]
    LockPoisoned,
}

/// Request body validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not well-formed JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body is JSON but not an object
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// Object does not fit the album shape
    #[error("Invalid album: {0}")]
    Shape(String),

    /// `id` present but empty
    #[error("Album id must not be empty")]
    EmptyId,
}
