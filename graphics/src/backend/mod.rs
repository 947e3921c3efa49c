//! Native backend abstraction layer.
//!
//! This module defines the narrow surface the graphics context needs from a
//! native renderer, so the rest of the crate never touches the renderer
//! directly.
//!
//! # Available Backends
//!
//! - `dummy` (default): In-process [`RendererType::Null`] backend for testing
//!   and headless use
//!
//! # Architecture
//!
//! Each backend implements the [`NativeBackend`] trait, which provides:
//! - Capability reporting and backbuffer reset
//! - Frame advancement
//! - Uniform and texture creation/destruction through recycled 16-bit indices
//! - Teardown

#[cfg(feature = "dummy")]
pub mod dummy;
mod error;

pub use error::BackendError;

use crate::types::{Capabilities, RendererType, ResetFlags, TextureFlags, UniformType};

/// The backend's own index for a native object.
///
/// Native indices are recycled as soon as an object is destroyed, so they
/// are never handed to callers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeHandle(pub u16);

impl NativeHandle {
    /// Raw index value.
    pub fn index(&self) -> u16 {
        self.0
    }
}

/// Native renderer trait for abstracting different rendering libraries.
///
/// Implementations are driven by exactly one [`GraphicsContext`] at a time
/// and never see the same native handle destroyed twice.
///
/// [`GraphicsContext`]: crate::GraphicsContext
pub trait NativeBackend: Send {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Renderer implementation behind this backend.
    fn renderer_type(&self) -> RendererType;

    /// Report renderer capabilities.
    fn capabilities(&self) -> Capabilities;

    /// Resize the backbuffer and apply reset flags.
    fn reset(&mut self, width: u32, height: u32, flags: ResetFlags);

    /// Submit the current frame and return the new frame number.
    fn frame(&mut self) -> u32;

    /// Create a shader uniform.
    fn create_uniform(
        &mut self,
        name: &str,
        ty: UniformType,
        count: u16,
    ) -> Result<NativeHandle, BackendError>;

    /// Destroy a shader uniform.
    fn destroy_uniform(&mut self, handle: NativeHandle);

    /// Create a texture from encoded bytes, skipping `skip` leading header bytes.
    ///
    /// The backend must copy whatever it keeps from `data` before returning.
    fn create_texture(
        &mut self,
        data: &[u8],
        flags: TextureFlags,
        skip: u8,
    ) -> Result<NativeHandle, BackendError>;

    /// Destroy a texture.
    fn destroy_texture(&mut self, handle: NativeHandle);

    /// Release every native resource. No other method is called afterwards.
    fn shutdown(&mut self);
}

/// Create the backend for a renderer kind.
///
/// # Errors
///
/// [`BackendError::FeatureNotSupported`] if no backend for `renderer` is
/// compiled in.
pub fn create_backend(renderer: RendererType) -> Result<Box<dyn NativeBackend>, BackendError> {
    match renderer {
        #[cfg(feature = "dummy")]
        RendererType::Null => {
            log::info!("Using dummy backend");
            Ok(Box::new(dummy::DummyBackend::new()))
        }
        other => Err(BackendError::FeatureNotSupported(format!(
            "no backend available for renderer {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_renderer() {
        let result = create_backend(RendererType::Direct3D11);
        assert!(matches!(
            result,
            Err(BackendError::FeatureNotSupported(_))
        ));
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn test_null_renderer_uses_dummy() {
        let backend = create_backend(RendererType::Null).unwrap();
        assert_eq!(backend.renderer_type(), RendererType::Null);
        assert_eq!(backend.name(), "Dummy Backend");
    }
}
