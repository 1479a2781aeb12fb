//! Error types for repository operations.

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
///
/// The in-memory backend never fails in practice; the enum exists so the
/// trait contract stays honest if a persistent backend is ever added.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal/unexpected errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
