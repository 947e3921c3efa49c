//! Dummy native backend for testing and headless use.
//!
//! This backend doesn't render anything but honours the full native contract:
//! it allocates and recycles 16-bit indices, copies texture bytes, counts
//! frames, and reports a fixed capability set. A [`DummyProbe`] observes its
//! state from outside, which is how tests check what actually reached the
//! native layer.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::{
    Capabilities, CapFlags, DepthCompare, RenderTarget, RendererType, ResetFlags, ResetMsaa,
    TextureFlags, UniformType,
};

use super::{BackendError, NativeBackend, NativeHandle};

/// Default number of uniform slots, matching the native default.
pub const DEFAULT_MAX_UNIFORMS: u16 = 512;
/// Default number of texture slots, matching the native default.
pub const DEFAULT_MAX_TEXTURES: u16 = 4096;

/// Uniform as recorded by the dummy backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyUniform {
    /// Uniform name.
    pub name: String,
    /// Uniform type.
    pub ty: UniformType,
    /// Array length.
    pub count: u16,
    /// Bytes of uniform storage reserved for the whole array.
    pub size: usize,
}

/// Texture as recorded by the dummy backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyTexture {
    /// Copy of the bytes handed over at creation.
    pub data: Vec<u8>,
    /// Creation flags.
    pub flags: TextureFlags,
    /// Leading header bytes the decoder skips.
    pub skip: u8,
    /// Samples per pixel (1 unless the texture is a multisampled render target).
    pub samples: u32,
    /// Depth comparison used when sampling.
    pub compare: Option<DepthCompare>,
}

/// Free-list allocator for native indices.
#[derive(Debug)]
struct IndexAllocator {
    free: Vec<u16>,
    next: u16,
    max: u16,
}

impl IndexAllocator {
    fn new(max: u16) -> Self {
        Self {
            free: Vec::new(),
            next: 0,
            max,
        }
    }

    fn alloc(&mut self) -> Option<u16> {
        if let Some(index) = self.free.pop() {
            return Some(index);
        }
        if self.next < self.max {
            let index = self.next;
            self.next += 1;
            return Some(index);
        }
        None
    }

    fn release(&mut self, index: u16) {
        self.free.push(index);
    }
}

/// A table of live native objects addressed by recycled index.
#[derive(Debug)]
struct Slots<T> {
    allocator: IndexAllocator,
    entries: Vec<Option<T>>,
    live: usize,
}

impl<T> Slots<T> {
    fn new(max: u16) -> Self {
        Self {
            allocator: IndexAllocator::new(max),
            entries: Vec::new(),
            live: 0,
        }
    }

    fn insert(&mut self, value: T) -> Option<u16> {
        let index = self.allocator.alloc()?;
        let slot = index as usize;
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(value);
        self.live += 1;
        Some(index)
    }

    fn remove(&mut self, index: u16) -> Option<T> {
        let value = self.entries.get_mut(index as usize)?.take()?;
        self.allocator.release(index);
        self.live -= 1;
        Some(value)
    }

    fn get(&self, index: u16) -> Option<&T> {
        self.entries.get(index as usize)?.as_ref()
    }

    fn clear(&mut self) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.take().is_some() {
                self.allocator.release(index as u16);
            }
        }
        self.live = 0;
    }
}

#[derive(Debug)]
struct DummyState {
    uniforms: Slots<DummyUniform>,
    textures: Slots<DummyTexture>,
    frame: u32,
    resolution: (u32, u32),
    reset_flags: ResetFlags,
    backbuffer_samples: u32,
    shut_down: bool,
}

/// Dummy native backend.
#[derive(Debug)]
pub struct DummyBackend {
    state: Arc<Mutex<DummyState>>,
}

impl DummyBackend {
    /// Create a new dummy backend with the native default limits.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_UNIFORMS, DEFAULT_MAX_TEXTURES)
    }

    /// Create a dummy backend with custom handle limits.
    pub fn with_limits(max_uniforms: u16, max_textures: u16) -> Self {
        log::trace!(
            "DummyBackend: creating with {} uniform / {} texture slots",
            max_uniforms,
            max_textures
        );
        Self {
            state: Arc::new(Mutex::new(DummyState {
                uniforms: Slots::new(max_uniforms),
                textures: Slots::new(max_textures),
                frame: 0,
                resolution: (0, 0),
                reset_flags: ResetFlags::empty(),
                backbuffer_samples: 1,
                shut_down: false,
            })),
        }
    }

    /// Get an observer for this backend's state.
    ///
    /// The probe stays usable after the backend has been moved into a
    /// context or dropped.
    pub fn probe(&self) -> DummyProbe {
        DummyProbe {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn renderer_type(&self) -> RendererType {
        RendererType::Null
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            renderer_type: RendererType::Null,
            supported: CapFlags::TEXTURE_COMPARE_ALL
                | CapFlags::TEXTURE_3D
                | CapFlags::VERTEX_ATTRIB_HALF
                | CapFlags::INSTANCING,
            emulated: CapFlags::empty(),
            max_texture_size: 16384,
            max_draw_calls: u16::MAX,
            max_fb_attachments: 8,
        }
    }

    fn reset(&mut self, width: u32, height: u32, flags: ResetFlags) {
        let samples = flags.msaa().map_or(1, ResetMsaa::samples);
        log::trace!(
            "DummyBackend: reset {}x{} flags={:?} ({}x MSAA)",
            width,
            height,
            flags,
            samples
        );
        let mut state = self.state.lock();
        state.resolution = (width, height);
        state.reset_flags = flags;
        state.backbuffer_samples = samples;
    }

    fn frame(&mut self) -> u32 {
        let mut state = self.state.lock();
        state.frame = state.frame.wrapping_add(1);
        log::trace!("DummyBackend: frame {}", state.frame);
        state.frame
    }

    fn create_uniform(
        &mut self,
        name: &str,
        ty: UniformType,
        count: u16,
    ) -> Result<NativeHandle, BackendError> {
        log::trace!(
            "DummyBackend: creating uniform {:?} ({:?} x{})",
            name,
            ty,
            count
        );
        self.state
            .lock()
            .uniforms
            .insert(DummyUniform {
                name: name.to_string(),
                ty,
                count,
                size: ty.element_size() * count as usize,
            })
            .map(NativeHandle)
            .ok_or(BackendError::OutOfHandles("uniform"))
    }

    fn destroy_uniform(&mut self, handle: NativeHandle) {
        log::trace!("DummyBackend: destroying uniform {}", handle.index());
        if self.state.lock().uniforms.remove(handle.index()).is_none() {
            log::warn!(
                "DummyBackend: uniform {} is not live, ignoring destroy",
                handle.index()
            );
        }
    }

    fn create_texture(
        &mut self,
        data: &[u8],
        flags: TextureFlags,
        skip: u8,
    ) -> Result<NativeHandle, BackendError> {
        log::trace!(
            "DummyBackend: creating texture ({} bytes, flags={:?}, skip={})",
            data.len(),
            flags,
            skip
        );
        self.state
            .lock()
            .textures
            .insert(DummyTexture {
                data: data.to_vec(),
                flags,
                skip,
                samples: flags.render_target().map_or(1, RenderTarget::samples),
                compare: flags.compare(),
            })
            .map(NativeHandle)
            .ok_or(BackendError::OutOfHandles("texture"))
    }

    fn destroy_texture(&mut self, handle: NativeHandle) {
        log::trace!("DummyBackend: destroying texture {}", handle.index());
        if self.state.lock().textures.remove(handle.index()).is_none() {
            log::warn!(
                "DummyBackend: texture {} is not live, ignoring destroy",
                handle.index()
            );
        }
    }

    fn shutdown(&mut self) {
        let mut state = self.state.lock();
        log::trace!(
            "DummyBackend: shutting down ({} uniforms, {} textures live)",
            state.uniforms.live,
            state.textures.live
        );
        state.uniforms.clear();
        state.textures.clear();
        state.shut_down = true;
    }
}

/// Read-only view of a [`DummyBackend`]'s state.
#[derive(Debug, Clone)]
pub struct DummyProbe {
    state: Arc<Mutex<DummyState>>,
}

impl DummyProbe {
    /// Number of uniforms alive on the native side.
    pub fn live_uniforms(&self) -> usize {
        self.state.lock().uniforms.live
    }

    /// Number of textures alive on the native side.
    pub fn live_textures(&self) -> usize {
        self.state.lock().textures.live
    }

    /// Uniform recorded at a native index.
    pub fn uniform(&self, handle: NativeHandle) -> Option<DummyUniform> {
        self.state.lock().uniforms.get(handle.index()).cloned()
    }

    /// Texture recorded at a native index.
    pub fn texture(&self, handle: NativeHandle) -> Option<DummyTexture> {
        self.state.lock().textures.get(handle.index()).cloned()
    }

    /// Current frame number.
    pub fn frame(&self) -> u32 {
        self.state.lock().frame
    }

    /// Resolution and flags from the most recent reset.
    pub fn last_reset(&self) -> (u32, u32, ResetFlags) {
        let state = self.state.lock();
        (state.resolution.0, state.resolution.1, state.reset_flags)
    }

    /// Samples per pixel of the backbuffer after the most recent reset.
    pub fn backbuffer_samples(&self) -> u32 {
        self.state.lock().backbuffer_samples
    }

    /// Returns true once the backend has been shut down.
    pub fn is_shut_down(&self) -> bool {
        self.state.lock().shut_down
    }
}

// Ensure DummyBackend can move to the render thread
static_assertions::assert_impl_all!(DummyBackend: Send);
