//! # vbridge core
//!
//! Backend-independent vertex data handling: attribute and component type
//! model, sealed vertex layouts, and the codec that packs, unpacks, and
//! converts vertex records in caller-owned buffers.

pub mod vertex;

pub use vertex::{
    AttributeSemantic, ComponentType, Float4, VertexAttribute, VertexError, VertexLayout,
    VertexLayoutBuilder,
};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
