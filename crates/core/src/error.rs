//! Error types for the quire reconciliation library.

use thiserror::Error;

/// Primary error type for reconciliation operations.
///
/// The library itself is fail-soft: degenerate input is answered with
/// `None`/empty results, never an error. The only fallible collaborator is
/// the pluggable sentence detector, whose failures detector implementations
/// report through [`QuireError::Detector`].
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("sentence detector failure: {0}")]
    Detector(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Convenience Result type alias for QuireError.
pub type Result<T> = std::result::Result<T, QuireError>;
