//! Texture creation flags.

use bitflags::bitflags;

bitflags! {
    /// Sampling and usage flags passed to the native layer at texture creation.
    ///
    /// Only single-bit flags are named here. The render-target and depth
    /// compare fields are multi-bit values set through
    /// [`with_render_target`](Self::with_render_target) and
    /// [`with_compare`](Self::with_compare).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureFlags: u32 {
        /// Mirror addressing along U.
        const U_MIRROR = 0x0000_0001;
        /// Clamp addressing along U.
        const U_CLAMP = 0x0000_0002;
        /// Mirror addressing along V.
        const V_MIRROR = 0x0000_0004;
        /// Clamp addressing along V.
        const V_CLAMP = 0x0000_0008;
        /// Mirror addressing along W.
        const W_MIRROR = 0x0000_0010;
        /// Clamp addressing along W.
        const W_CLAMP = 0x0000_0020;
        /// Point minification filter.
        const MIN_POINT = 0x0000_0040;
        /// Anisotropic minification filter.
        const MIN_ANISOTROPIC = 0x0000_0080;
        /// Point magnification filter.
        const MAG_POINT = 0x0000_0100;
        /// Anisotropic magnification filter.
        const MAG_ANISOTROPIC = 0x0000_0200;
        /// Point mip filter.
        const MIP_POINT = 0x0000_0400;
        /// Render target that is never sampled.
        const RT_BUFFER_ONLY = 0x0000_8000;
    }
}

/// Render-target field of [`TextureFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// Single-sampled render target.
    Single = 1,
    /// 2x MSAA.
    MsaaX2 = 2,
    /// 4x MSAA.
    MsaaX4 = 3,
    /// 8x MSAA.
    MsaaX8 = 4,
    /// 16x MSAA.
    MsaaX16 = 5,
}

impl RenderTarget {
    /// Samples per pixel.
    pub fn samples(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::MsaaX2 => 2,
            Self::MsaaX4 => 4,
            Self::MsaaX8 => 8,
            Self::MsaaX16 => 16,
        }
    }

    fn from_field(field: u32) -> Option<Self> {
        match field {
            1 => Some(Self::Single),
            2 => Some(Self::MsaaX2),
            3 => Some(Self::MsaaX4),
            4 => Some(Self::MsaaX8),
            5 => Some(Self::MsaaX16),
            _ => None,
        }
    }
}

/// Depth compare field of [`TextureFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthCompare {
    Less = 1,
    LessEqual = 2,
    Equal = 3,
    GreaterEqual = 4,
    Greater = 5,
    NotEqual = 6,
    Never = 7,
    Always = 8,
}

impl DepthCompare {
    fn from_field(field: u32) -> Option<Self> {
        match field {
            1 => Some(Self::Less),
            2 => Some(Self::LessEqual),
            3 => Some(Self::Equal),
            4 => Some(Self::GreaterEqual),
            5 => Some(Self::Greater),
            6 => Some(Self::NotEqual),
            7 => Some(Self::Never),
            8 => Some(Self::Always),
            _ => None,
        }
    }
}

impl TextureFlags {
    /// Bits of the render-target field.
    pub const RT_MASK: u32 = 0x0000_7000;
    const RT_SHIFT: u32 = 12;
    /// Bits of the depth compare field.
    pub const COMPARE_MASK: u32 = 0x000F_0000;
    const COMPARE_SHIFT: u32 = 16;

    /// Set the render-target field, replacing any previous value.
    pub fn with_render_target(self, target: RenderTarget) -> Self {
        let field = (target as u32) << Self::RT_SHIFT;
        Self::from_bits_retain((self.bits() & !Self::RT_MASK) | field)
    }

    /// Render-target field, or `None` for a sampled-only texture.
    pub fn render_target(&self) -> Option<RenderTarget> {
        RenderTarget::from_field((self.bits() & Self::RT_MASK) >> Self::RT_SHIFT)
    }

    /// Set the depth compare field, replacing any previous value.
    pub fn with_compare(self, compare: DepthCompare) -> Self {
        let field = (compare as u32) << Self::COMPARE_SHIFT;
        Self::from_bits_retain((self.bits() & !Self::COMPARE_MASK) | field)
    }

    /// Depth compare field, or `None` if comparison is off.
    pub fn compare(&self) -> Option<DepthCompare> {
        DepthCompare::from_field((self.bits() & Self::COMPARE_MASK) >> Self::COMPARE_SHIFT)
    }
}

impl Default for TextureFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_values() {
        assert_eq!(TextureFlags::U_CLAMP.bits(), 0x2);
        assert_eq!(TextureFlags::MIP_POINT.bits(), 0x400);
        assert_eq!(TextureFlags::RT_BUFFER_ONLY.bits(), 0x8000);
        assert_eq!(TextureFlags::default(), TextureFlags::empty());

        let flags = TextureFlags::empty()
            .with_render_target(RenderTarget::MsaaX4)
            .with_compare(DepthCompare::Always);
        assert_eq!(flags.bits(), 0x0008_3000);
    }

    #[test]
    fn test_render_target_field() {
        assert_eq!(TextureFlags::empty().render_target(), None);

        let x4 = TextureFlags::U_CLAMP.with_render_target(RenderTarget::MsaaX4);
        let x2 = TextureFlags::U_CLAMP.with_render_target(RenderTarget::MsaaX2);
        assert_eq!(x4.render_target(), Some(RenderTarget::MsaaX4));
        assert_eq!(x4.render_target().map(RenderTarget::samples), Some(4));
        assert_eq!(x2.render_target(), Some(RenderTarget::MsaaX2));
        assert_ne!(x4.render_target(), x2.render_target());
        assert!(x4.contains(TextureFlags::U_CLAMP));

        let single = x4.with_render_target(RenderTarget::Single);
        assert_eq!(single.render_target(), Some(RenderTarget::Single));
        assert!(single.contains(TextureFlags::U_CLAMP));
    }

    #[test]
    fn test_compare_field() {
        assert_eq!(TextureFlags::U_MIRROR.compare(), None);

        let equal = TextureFlags::empty().with_compare(DepthCompare::Equal);
        let less = TextureFlags::empty().with_compare(DepthCompare::Less);
        assert_eq!(equal.compare(), Some(DepthCompare::Equal));
        assert_ne!(equal.compare(), less.compare());
        assert_eq!(
            equal.with_compare(DepthCompare::Never).compare(),
            Some(DepthCompare::Never)
        );
    }
}
