//! Error types for the divination engine.

use zy_core::CoreError;

use crate::request::ValidationIssue;

/// Result type for divination operations.
pub type DivinationResult<T> = Result<T, DivinationError>;

/// Errors that can occur while performing a divination.
#[derive(Debug, thiserror::Error)]
pub enum DivinationError {
    /// The request failed field validation; the report lists every issue
    /// found so the caller can re-prompt once.
    #[error("invalid request: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    InvalidRequest(Vec<ValidationIssue>),

    /// A catalog lookup failed.
    ///
    /// The standard catalog is complete, so this indicates a caller bug or
    /// a corrupted catalog, never a user-input problem.
    #[error("{0}")]
    Catalog(#[from] CoreError),
}
