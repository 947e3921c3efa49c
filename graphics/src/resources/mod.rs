//! Native resource handles.
//!
//! Handles created by a [`GraphicsContext`]:
//! - [`UniformHandle`] - Shader uniform
//! - [`TextureHandle`] - Texture
//!
//! Handles are plain `Copy` values tagged with the issuing context and a
//! serial number. The context resolves them to the backend's recycled native
//! indices, rejecting destroyed and foreign handles.
//!
//! [`GraphicsContext`]: crate::GraphicsContext

mod handles;

pub(crate) use handles::HandleRegistry;
pub use handles::{ContextId, TextureHandle, UniformHandle};
