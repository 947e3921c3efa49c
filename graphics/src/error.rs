//! Graphics error types.

use thiserror::Error;

use crate::backend::BackendError;

/// Errors that can occur in the graphics context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// An invalid parameter was provided. Nothing was created natively.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The handle was already destroyed or belongs to another context.
    #[error("invalid handle: {0}")]
    InvalidHandle(String),
    /// The backend rejected the operation.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result alias for graphics operations.
pub type Result<T> = std::result::Result<T, GraphicsError>;
