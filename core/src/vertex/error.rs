//! Error types for vertex layout construction and the vertex codec.

use thiserror::Error;

use super::attribute::AttributeSemantic;

/// Errors reported by layout construction and the codec.
///
/// Every variant is a caller contract violation detected before any byte of
/// a caller buffer is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    /// Malformed input to a layout-construction call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The layout has no field for the requested semantic.
    #[error("attribute {0} is not present in the layout")]
    UnknownAttribute(AttributeSemantic),
    /// The buffer cannot hold the addressed vertex.
    #[error("buffer too small: {required} bytes required, {actual} available")]
    BufferTooSmall {
        /// Bytes needed to address the vertex.
        required: usize,
        /// Bytes the caller supplied.
        actual: usize,
    },
    /// The buffer length does not match `vertex_count * stride`.
    #[error("{buffer} buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Which buffer was wrong ("source" or "destination").
        buffer: &'static str,
        /// Length implied by the layout and vertex count.
        expected: usize,
        /// Length the caller supplied.
        actual: usize,
    },
}

/// Result alias for vertex operations.
pub type Result<T> = std::result::Result<T, VertexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VertexError::UnknownAttribute(AttributeSemantic::TexCoord1);
        assert_eq!(
            err.to_string(),
            "attribute texcoord1 is not present in the layout"
        );

        let err = VertexError::SizeMismatch {
            buffer: "destination",
            expected: 48,
            actual: 40,
        };
        assert_eq!(
            err.to_string(),
            "destination buffer size mismatch: expected 48 bytes, got 40"
        );
    }
}
