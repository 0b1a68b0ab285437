//! Error types for baryweave.
//!
//! All crates return `BaryweaveResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for baryweave.
#[derive(Debug, Error)]
pub enum BaryweaveError {
    /// No source mesh was supplied to a build call.
    #[error("Missing source mesh: {0}")]
    MissingSource(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A wireframe invariant was violated (e.g. duplicate masses in a triangle).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, BaryweaveError>`.
pub type BaryweaveResult<T> = Result<T, BaryweaveError>;
