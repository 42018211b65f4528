//! Error types for the etag crate.

use thiserror::Error;

/// Result type alias for etag operations.
pub type Result<T> = std::result::Result<T, EtagError>;

/// Errors that can occur while classifying an entity.
///
/// Both variants are usage errors raised before any hashing happens;
/// none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EtagError {
    /// No entity was supplied
    #[error("argument entity is required")]
    EntityRequired,

    /// Entity is neither content nor a stat-like descriptor
    #[error("argument entity must be string, Buffer, or stat (got {0})")]
    UnsupportedEntity(String),
}

/// Broad error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument the generator cannot accept
    InvalidArgument,
}

/// Error code for programmatic error handling.
/// Range: 12xxx for etag errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtagErrorCode {
    /// Entity missing
    EntityRequired = 12001,
    /// Entity has an unsupported shape
    UnsupportedEntity = 12002,
}

impl EtagError {
    /// Returns the error code for this error.
    pub fn code(&self) -> EtagErrorCode {
        match self {
            EtagError::EntityRequired => EtagErrorCode::EntityRequired,
            EtagError::UnsupportedEntity(_) => EtagErrorCode::UnsupportedEntity,
        }
    }

    /// Returns the error category. Every etag error is an invalid argument.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
