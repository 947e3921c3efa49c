//! Backbuffer reset flags.

use bitflags::bitflags;

bitflags! {
    /// Flags applied when the backbuffer is reset.
    ///
    /// The multisample field is set through [`with_msaa`](Self::with_msaa).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResetFlags: u32 {
        /// Exclusive fullscreen.
        const FULLSCREEN = 0x0000_0001;
        /// Wait for vertical sync when presenting.
        const VSYNC = 0x0000_0080;
    }
}

/// Backbuffer multisample field of [`ResetFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetMsaa {
    X2 = 1,
    X4 = 2,
    X8 = 3,
    X16 = 4,
}

impl ResetMsaa {
    /// Samples per pixel.
    pub fn samples(self) -> u32 {
        2 << (self as u32 - 1)
    }
}

impl ResetFlags {
    /// Bits of the multisample field.
    pub const MSAA_MASK: u32 = 0x0000_0070;
    const MSAA_SHIFT: u32 = 4;

    /// Set the multisample field, replacing any previous value.
    pub fn with_msaa(self, msaa: ResetMsaa) -> Self {
        let field = (msaa as u32) << Self::MSAA_SHIFT;
        Self::from_bits_retain((self.bits() & !Self::MSAA_MASK) | field)
    }

    /// Multisample field, or `None` for a single-sampled backbuffer.
    pub fn msaa(&self) -> Option<ResetMsaa> {
        match (self.bits() & Self::MSAA_MASK) >> Self::MSAA_SHIFT {
            1 => Some(ResetMsaa::X2),
            2 => Some(ResetMsaa::X4),
            3 => Some(ResetMsaa::X8),
            4 => Some(ResetMsaa::X16),
            _ => None,
        }
    }
}

impl Default for ResetFlags {
    fn default() -> Self {
        Self::VSYNC
    }
}
