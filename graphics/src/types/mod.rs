//! Native enums and flag families.
//!
//! Values mirror the native renderer's constants so they can cross the
//! backend boundary unchanged.

mod caps;
mod reset;
mod texture;
mod uniform;

pub use caps::{Capabilities, CapFlags, RendererType};
pub use reset::{ResetFlags, ResetMsaa};
pub use texture::{DepthCompare, RenderTarget, TextureFlags};
pub use uniform::UniformType;
