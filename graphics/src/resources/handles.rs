//! Caller-facing resource handles and the per-context handle registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::backend::NativeHandle;
use crate::error::{GraphicsError, Result};

/// Identifies the [`GraphicsContext`] that issued a handle.
///
/// [`GraphicsContext`]: crate::GraphicsContext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u32);

impl ContextId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a shader uniform.
///
/// Valid from [`GraphicsContext::create_uniform`] until
/// [`GraphicsContext::destroy_uniform`]. Copies share that lifetime; the
/// handle is not reference counted.
///
/// [`GraphicsContext::create_uniform`]: crate::GraphicsContext::create_uniform
/// [`GraphicsContext::destroy_uniform`]: crate::GraphicsContext::destroy_uniform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformHandle {
    pub(crate) context: ContextId,
    pub(crate) serial: u64,
}

impl UniformHandle {
    /// Context that issued this handle.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Serial number, unique within the issuing context.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// Handle to a texture.
///
/// Valid from [`GraphicsContext::create_texture`] until
/// [`GraphicsContext::destroy_texture`].
///
/// [`GraphicsContext::create_texture`]: crate::GraphicsContext::create_texture
/// [`GraphicsContext::destroy_texture`]: crate::GraphicsContext::destroy_texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub(crate) context: ContextId,
    pub(crate) serial: u64,
}

impl TextureHandle {
    /// Context that issued this handle.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Serial number, unique within the issuing context.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// Maps live handle serials of one kind to the backend's native indices.
///
/// Serials increase monotonically and are never reused, so a stale handle
/// cannot alias a newer object even after the backend recycles its index.
#[derive(Debug)]
pub(crate) struct HandleRegistry {
    kind: &'static str,
    context: ContextId,
    next_serial: u64,
    live: HashMap<u64, NativeHandle>,
}

impl HandleRegistry {
    pub(crate) fn new(kind: &'static str, context: ContextId) -> Self {
        Self {
            kind,
            context,
            next_serial: 1,
            live: HashMap::new(),
        }
    }

    /// Record a freshly created native object and return its serial.
    pub(crate) fn insert(&mut self, native: NativeHandle) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.live.insert(serial, native);
        serial
    }

    /// Look up the native index behind a handle.
    pub(crate) fn resolve(&self, context: ContextId, serial: u64) -> Result<NativeHandle> {
        self.check_owner(context, serial)?;
        self.live
            .get(&serial)
            .copied()
            .ok_or_else(|| self.stale(serial))
    }

    /// Forget a handle, returning the native index to destroy.
    pub(crate) fn remove(&mut self, context: ContextId, serial: u64) -> Result<NativeHandle> {
        self.check_owner(context, serial)?;
        self.live.remove(&serial).ok_or_else(|| self.stale(serial))
    }

    pub(crate) fn contains(&self, context: ContextId, serial: u64) -> bool {
        context == self.context && self.live.contains_key(&serial)
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    /// Remove every live entry, in serial order.
    pub(crate) fn drain(&mut self) -> Vec<NativeHandle> {
        let mut entries: Vec<_> = self.live.drain().collect();
        entries.sort_unstable_by_key(|(serial, _)| *serial);
        entries.into_iter().map(|(_, native)| native).collect()
    }

    fn check_owner(&self, context: ContextId, serial: u64) -> Result<()> {
        if context != self.context {
            return Err(GraphicsError::InvalidHandle(format!(
                "{} handle {serial} belongs to context {context}, not {}",
                self.kind, self.context
            )));
        }
        Ok(())
    }

    fn stale(&self, serial: u64) -> GraphicsError {
        GraphicsError::InvalidHandle(format!(
            "{} handle {serial} was already destroyed",
            self.kind
        ))
    }
}
