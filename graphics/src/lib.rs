//! # vbridge Graphics
//!
//! Safe ownership layer over a native, fixed-format renderer.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`GraphicsContext`] - Owns the backend and every uniform/texture handle
//! - [`NativeBackend`] - Trait for native renderer implementations
//! - [`types`] - Native flag families, capabilities and uniform types
//! - [`vertex`] - Vertex layouts and the vertex codec (re-exported from `vbridge-core`)
//!
//! ## Example
//!
//! ```
//! use vbridge_graphics::{ContextConfig, GraphicsContext, UniformType};
//!
//! let mut context = GraphicsContext::new(ContextConfig::new())?;
//! let time = context.create_uniform("u_time", UniformType::Float1, 1)?;
//! context.frame();
//! context.destroy_uniform(time)?;
//! # Ok::<(), vbridge_graphics::GraphicsError>(())
//! ```

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod resources;
pub mod types;

pub use vbridge_core::vertex;

// Re-export main types for convenience
#[cfg(feature = "dummy")]
pub use backend::dummy::{DummyBackend, DummyProbe};
pub use backend::{BackendError, NativeBackend, NativeHandle};
pub use config::ContextConfig;
pub use context::GraphicsContext;
pub use error::{GraphicsError, Result};
pub use resources::{ContextId, TextureHandle, UniformHandle};
pub use types::{
    Capabilities, CapFlags, DepthCompare, RenderTarget, RendererType, ResetFlags, ResetMsaa,
    TextureFlags, UniformType,
};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_vertex_reexport() {
        let layout = vertex::VertexLayout::position_color();
        assert_eq!(layout.stride(), 16);
    }
}
