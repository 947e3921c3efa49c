//! Backend error types.

use thiserror::Error;

/// Errors that can occur in backend operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested feature is not supported.
    #[error("feature not supported: {0}")]
    FeatureNotSupported(String),
    /// The backend has no free native handles of the requested kind.
    #[error("out of native {0} handles")]
    OutOfHandles(&'static str),
}
