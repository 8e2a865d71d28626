//! Error types for the adapter boundary.
//!
//! Nothing in this crate fails on its own account: disabled features and
//! empty engine answers are ordinary results. These variants carry failures
//! raised by the collaborators (the engine and the document manager), which
//! are propagated to the caller unchanged.

use thiserror::Error;

/// Errors surfaced from external collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// The analysis engine failed to answer a query.
    #[error("analysis engine error: {0}")]
    Engine(String),

    /// The document manager failed to open or lock a document.
    #[error("document manager error: {0}")]
    Documents(String),

    /// A virtual file path that cannot be expressed as a `file://` URI.
    #[error("path has no file URI: {0}")]
    InvalidPath(String),
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;
