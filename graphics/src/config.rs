//! Graphics context configuration.

use crate::types::{RendererType, ResetFlags};

/// Parameters for creating a [`GraphicsContext`].
///
/// # Example
///
/// ```
/// use vbridge_graphics::{ContextConfig, RendererType, ResetFlags, ResetMsaa};
///
/// let config = ContextConfig::new()
///     .with_renderer(RendererType::Null)
///     .with_resolution(1920, 1080)
///     .with_reset_flags(ResetFlags::VSYNC.with_msaa(ResetMsaa::X4));
/// assert_eq!(config.width, 1920);
/// ```
///
/// [`GraphicsContext`]: crate::GraphicsContext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    /// Preferred renderer.
    pub renderer: RendererType,
    /// Initial backbuffer width.
    pub width: u32,
    /// Initial backbuffer height.
    pub height: u32,
    /// Initial reset flags.
    pub reset_flags: ResetFlags,
}

impl ContextConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred renderer.
    pub fn with_renderer(mut self, renderer: RendererType) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the initial backbuffer size.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the initial reset flags.
    pub fn with_reset_flags(mut self, flags: ResetFlags) -> Self {
        self.reset_flags = flags;
        self
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            renderer: RendererType::Null,
            width: 1280,
            height: 720,
            reset_flags: ResetFlags::VSYNC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContextConfig::new();
        assert_eq!(config.renderer, RendererType::Null);
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.reset_flags, ResetFlags::VSYNC);
    }
}
