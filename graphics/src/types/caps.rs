//! Renderer kinds and capability reporting.

use bitflags::bitflags;

/// Native renderer implementation behind a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererType {
    /// No rendering; every call is accepted and discarded.
    #[default]
    Null,
    /// Direct3D 9.
    Direct3D9,
    /// Direct3D 11.
    Direct3D11,
    /// OpenGL ES.
    OpenGLES,
    /// Desktop OpenGL.
    OpenGL,
}

impl RendererType {
    /// Human-readable renderer name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Direct3D9 => "Direct3D 9",
            Self::Direct3D11 => "Direct3D 11",
            Self::OpenGLES => "OpenGL ES",
            Self::OpenGL => "OpenGL",
        }
    }
}

impl std::fmt::Display for RendererType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Renderer feature bits reported in [`Capabilities`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapFlags: u64 {
        const TEXTURE_FORMAT_BC1 = 1 << 0;
        const TEXTURE_FORMAT_BC2 = 1 << 1;
        const TEXTURE_FORMAT_BC3 = 1 << 2;
        const TEXTURE_FORMAT_BC4 = 1 << 3;
        const TEXTURE_FORMAT_BC5 = 1 << 4;
        const TEXTURE_FORMAT_ETC1 = 1 << 5;
        const TEXTURE_FORMAT_ETC2 = 1 << 6;
        const TEXTURE_FORMAT_ETC2A = 1 << 7;
        const TEXTURE_FORMAT_ETC2A1 = 1 << 8;
        const TEXTURE_FORMAT_PTC12 = 1 << 9;
        const TEXTURE_FORMAT_PTC14 = 1 << 10;
        const TEXTURE_FORMAT_PTC14A = 1 << 11;
        const TEXTURE_FORMAT_PTC12A = 1 << 12;
        const TEXTURE_FORMAT_PTC22 = 1 << 13;
        const TEXTURE_FORMAT_PTC24 = 1 << 14;
        const TEXTURE_FORMAT_D16 = 1 << 15;
        const TEXTURE_FORMAT_D24 = 1 << 16;
        const TEXTURE_FORMAT_D24S8 = 1 << 17;
        const TEXTURE_FORMAT_D32 = 1 << 18;
        const TEXTURE_FORMAT_D16F = 1 << 19;
        const TEXTURE_FORMAT_D24F = 1 << 20;
        const TEXTURE_FORMAT_D32F = 1 << 21;
        const TEXTURE_FORMAT_D0S8 = 1 << 22;

        /// Depth textures support `less or equal` comparison.
        const TEXTURE_COMPARE_LEQUAL = 0x0000_0000_0100_0000;
        /// Depth textures support every comparison.
        const TEXTURE_COMPARE_ALL = 0x0000_0000_0300_0000;
        /// 3D textures.
        const TEXTURE_3D = 0x0000_0000_0400_0000;
        /// Half-float vertex attributes.
        const VERTEX_ATTRIB_HALF = 0x0000_0000_0800_0000;
        /// Instanced drawing.
        const INSTANCING = 0x0000_0000_1000_0000;
        /// Rendering runs on its own thread.
        const RENDERER_MULTITHREADED = 0x0000_0000_2000_0000;
        /// Fragment shaders can write depth.
        const FRAGMENT_DEPTH = 0x0000_0000_4000_0000;
        /// Independent blend state per render target.
        const BLEND_INDEPENDENT = 0x0000_0000_8000_0000;
    }
}

impl Default for CapFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Snapshot of what the active renderer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// Renderer that produced this report.
    pub renderer_type: RendererType,
    /// Features available natively.
    pub supported: CapFlags,
    /// Features available through emulation.
    pub emulated: CapFlags,
    /// Largest texture dimension.
    pub max_texture_size: u16,
    /// Draw calls per frame.
    pub max_draw_calls: u16,
    /// Framebuffer attachment slots.
    pub max_fb_attachments: u8,
}

impl Capabilities {
    /// Returns true if every flag in `flags` is supported natively or emulated.
    pub fn has(&self, flags: CapFlags) -> bool {
        (self.supported | self.emulated).contains(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_bits() {
        assert_eq!(CapFlags::TEXTURE_FORMAT_D0S8.bits(), 0x40_0000);
        assert_eq!(CapFlags::TEXTURE_3D.bits(), 0x400_0000);
        assert_eq!(CapFlags::BLEND_INDEPENDENT.bits(), 0x8000_0000);
        assert!(CapFlags::TEXTURE_COMPARE_ALL.contains(CapFlags::TEXTURE_COMPARE_LEQUAL));
    }

    #[test]
    fn test_capabilities_has() {
        let caps = Capabilities {
            supported: CapFlags::INSTANCING,
            emulated: CapFlags::VERTEX_ATTRIB_HALF,
            ..Default::default()
        };
        assert!(caps.has(CapFlags::INSTANCING | CapFlags::VERTEX_ATTRIB_HALF));
        assert!(!caps.has(CapFlags::TEXTURE_3D));
    }

    #[test]
    fn test_renderer_display() {
        assert_eq!(RendererType::default(), RendererType::Null);
        assert_eq!(RendererType::OpenGLES.to_string(), "OpenGL ES");
    }
}
