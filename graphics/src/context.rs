//! Graphics context.
//!
//! The [`GraphicsContext`] is the top-level entry point for the native side.
//! It owns the backend, applies the initial reset, and is the only way to
//! create and destroy uniforms and textures.

use crate::backend::{self, NativeBackend, NativeHandle};
use crate::config::ContextConfig;
use crate::error::{GraphicsError, Result};
use crate::resources::{ContextId, HandleRegistry, TextureHandle, UniformHandle};
use crate::types::{Capabilities, RendererType, ResetFlags, TextureFlags, UniformType};

/// Owns a native backend and the handles created through it.
///
/// # Thread Safety
///
/// `GraphicsContext` is `Send` but not `Sync`: it may be moved to a render
/// thread, but every operation goes through one owner. Mutating calls take
/// `&mut self`.
///
/// # Example
///
/// ```
/// use vbridge_graphics::{ContextConfig, GraphicsContext, TextureFlags, UniformType};
///
/// let mut context = GraphicsContext::new(ContextConfig::new())?;
/// let tint = context.create_uniform("u_tint", UniformType::Float4Array, 1)?;
/// let texture = context.create_texture(&[0xFF; 64], TextureFlags::U_CLAMP, 0)?;
///
/// context.frame();
///
/// context.destroy_texture(texture)?;
/// context.destroy_uniform(tint)?;
/// context.shutdown();
/// # Ok::<(), vbridge_graphics::GraphicsError>(())
/// ```
pub struct GraphicsContext {
    id: ContextId,
    config: ContextConfig,
    backend: Box<dyn NativeBackend>,
    uniforms: HandleRegistry,
    textures: HandleRegistry,
    frame: u32,
    shut_down: bool,
}

impl GraphicsContext {
    /// Create a context with the backend for `config.renderer`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Backend`] if no backend is available for the
    /// requested renderer.
    pub fn new(config: ContextConfig) -> Result<Self> {
        log::info!("Creating GraphicsContext ({} renderer)", config.renderer);
        let backend = backend::create_backend(config.renderer)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Create a context around an existing backend.
    ///
    /// `config.renderer` is informational here; the backend decides which
    /// renderer is actually used.
    pub fn with_backend(config: ContextConfig, mut backend: Box<dyn NativeBackend>) -> Self {
        let id = ContextId::next();
        log::info!("GraphicsContext {}: using backend {}", id, backend.name());

        if backend.renderer_type() != config.renderer {
            log::warn!(
                "GraphicsContext {}: requested {} renderer, backend provides {}",
                id,
                config.renderer,
                backend.renderer_type()
            );
        }

        backend.reset(config.width, config.height, config.reset_flags);

        Self {
            id,
            uniforms: HandleRegistry::new("uniform", id),
            textures: HandleRegistry::new("texture", id),
            config,
            backend,
            frame: 0,
            shut_down: false,
        }
    }

    /// Identifier stamped into every handle this context issues.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Configuration this context was created with, updated by [`reset`](Self::reset).
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Renderer implementation behind the backend.
    pub fn renderer_type(&self) -> RendererType {
        self.backend.renderer_type()
    }

    /// Query renderer capabilities.
    pub fn capabilities(&self) -> Capabilities {
        self.backend.capabilities()
    }

    /// Resize the backbuffer and apply new reset flags.
    pub fn reset(&mut self, width: u32, height: u32, flags: ResetFlags) {
        log::debug!("GraphicsContext {}: reset {}x{}", self.id, width, height);
        self.backend.reset(width, height, flags);
        self.config.width = width;
        self.config.height = height;
        self.config.reset_flags = flags;
    }

    /// Submit the current frame and return the new frame number.
    pub fn frame(&mut self) -> u32 {
        self.frame = self.backend.frame();
        self.frame
    }

    /// Number of the most recently submitted frame (0 before the first).
    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    // ========================================================================
    // Uniforms
    // ========================================================================

    /// Create a shader uniform.
    ///
    /// Names are not deduplicated; the backend owns their meaning.
    ///
    /// # Errors
    ///
    /// - [`GraphicsError::InvalidArgument`] if `name` is empty or contains a
    ///   NUL byte, or `count` is zero.
    /// - [`GraphicsError::Backend`] if the backend refuses.
    pub fn create_uniform(
        &mut self,
        name: &str,
        ty: UniformType,
        count: u16,
    ) -> Result<UniformHandle> {
        if name.is_empty() {
            return Err(GraphicsError::InvalidArgument(
                "uniform name must not be empty".to_string(),
            ));
        }
        if name.contains('\0') {
            return Err(GraphicsError::InvalidArgument(format!(
                "uniform name {name:?} contains a NUL byte"
            )));
        }
        if count == 0 {
            return Err(GraphicsError::InvalidArgument(format!(
                "uniform {name:?} must have at least one element"
            )));
        }

        let native = self.backend.create_uniform(name, ty, count)?;
        let serial = self.uniforms.insert(native);
        log::trace!(
            "GraphicsContext {}: created uniform {:?} #{} (native {})",
            self.id,
            name,
            serial,
            native.index()
        );

        Ok(UniformHandle {
            context: self.id,
            serial,
        })
    }

    /// Destroy a shader uniform.
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidHandle`] if the handle was already destroyed
    /// or was issued by another context.
    pub fn destroy_uniform(&mut self, handle: UniformHandle) -> Result<()> {
        let native = self
            .uniforms
            .remove(handle.context, handle.serial)
            .inspect_err(|e| log::warn!("GraphicsContext {}: {}", self.id, e))?;
        log::trace!(
            "GraphicsContext {}: destroying uniform #{} (native {})",
            self.id,
            handle.serial,
            native.index()
        );
        self.backend.destroy_uniform(native);
        Ok(())
    }

    /// Check if a uniform handle is live in this context.
    pub fn is_valid_uniform(&self, handle: UniformHandle) -> bool {
        self.uniforms.contains(handle.context, handle.serial)
    }

    /// Number of live uniforms.
    pub fn live_uniform_count(&self) -> usize {
        self.uniforms.len()
    }

    /// Resolve a uniform handle to the backend's native index.
    ///
    /// # Errors
    ///
    /// Same as [`destroy_uniform`](Self::destroy_uniform).
    pub fn native_uniform(&self, handle: UniformHandle) -> Result<NativeHandle> {
        self.uniforms.resolve(handle.context, handle.serial)
    }

    // ========================================================================
    // Textures
    // ========================================================================

    /// Create a texture from encoded bytes.
    ///
    /// `data` is only borrowed for the duration of the call; the backend
    /// copies it. `skip` leading header bytes are ignored by the decoder.
    /// Flag combinations are passed through unchecked.
    ///
    /// # Errors
    ///
    /// - [`GraphicsError::InvalidArgument`] if `data` is empty or `skip`
    ///   leaves nothing to decode. No native object is created.
    /// - [`GraphicsError::Backend`] if the backend refuses.
    pub fn create_texture(
        &mut self,
        data: &[u8],
        flags: TextureFlags,
        skip: u8,
    ) -> Result<TextureHandle> {
        if data.is_empty() {
            return Err(GraphicsError::InvalidArgument(
                "texture data is empty".to_string(),
            ));
        }
        if skip as usize >= data.len() {
            return Err(GraphicsError::InvalidArgument(format!(
                "skip of {skip} bytes leaves nothing of {} texture bytes",
                data.len()
            )));
        }

        let native = self.backend.create_texture(data, flags, skip)?;
        let serial = self.textures.insert(native);
        log::trace!(
            "GraphicsContext {}: created texture #{} ({} bytes, native {})",
            self.id,
            serial,
            data.len(),
            native.index()
        );

        Ok(TextureHandle {
            context: self.id,
            serial,
        })
    }

    /// Destroy a texture.
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidHandle`] if the handle was already destroyed
    /// or was issued by another context.
    pub fn destroy_texture(&mut self, handle: TextureHandle) -> Result<()> {
        let native = self
            .textures
            .remove(handle.context, handle.serial)
            .inspect_err(|e| log::warn!("GraphicsContext {}: {}", self.id, e))?;
        log::trace!(
            "GraphicsContext {}: destroying texture #{} (native {})",
            self.id,
            handle.serial,
            native.index()
        );
        self.backend.destroy_texture(native);
        Ok(())
    }

    /// Check if a texture handle is live in this context.
    pub fn is_valid_texture(&self, handle: TextureHandle) -> bool {
        self.textures.contains(handle.context, handle.serial)
    }

    /// Number of live textures.
    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Resolve a texture handle to the backend's native index.
    ///
    /// # Errors
    ///
    /// Same as [`destroy_texture`](Self::destroy_texture).
    pub fn native_texture(&self, handle: TextureHandle) -> Result<NativeHandle> {
        self.textures.resolve(handle.context, handle.serial)
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Shut the backend down, destroying any handles still alive.
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        let leaked_uniforms = self.uniforms.drain();
        let leaked_textures = self.textures.drain();
        if !leaked_uniforms.is_empty() || !leaked_textures.is_empty() {
            log::warn!(
                "GraphicsContext {}: shutting down with {} uniforms and {} textures still alive",
                self.id,
                leaked_uniforms.len(),
                leaked_textures.len()
            );
        }
        for native in leaked_textures {
            self.backend.destroy_texture(native);
        }
        for native in leaked_uniforms {
            self.backend.destroy_uniform(native);
        }

        self.backend.shutdown();
        log::info!("GraphicsContext {}: shut down", self.id);
    }
}

impl Drop for GraphicsContext {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for GraphicsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsContext")
            .field("id", &self.id)
            .field("backend", &self.backend.name())
            .field("live_uniforms", &self.uniforms.len())
            .field("live_textures", &self.textures.len())
            .finish()
    }
}

// Ensure GraphicsContext can move between threads but is never shared
static_assertions::assert_impl_all!(GraphicsContext: Send);
static_assertions::assert_not_impl_any!(GraphicsContext: Sync);
