//! Shader uniform types.

/// Type of a shader uniform.
///
/// Discriminants are the native values. Value 2 is reserved by the native
/// enum and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UniformType {
    /// Single `int`.
    Int1 = 0,
    /// Single `float`.
    Float1 = 1,
    /// Array of `int`.
    Int1Array = 3,
    /// Array of `float`.
    Float1Array = 4,
    /// Array of `vec2`.
    Float2Array = 5,
    /// Array of `vec3`.
    Float3Array = 6,
    /// Array of `vec4`.
    Float4Array = 7,
    /// Array of `mat3`.
    Float3x3Array = 8,
    /// Array of `mat4`.
    Float4x4Array = 9,
}

impl UniformType {
    /// Size in bytes of one element.
    pub fn element_size(&self) -> usize {
        match self {
            Self::Int1 | Self::Float1 | Self::Int1Array | Self::Float1Array => 4,
            Self::Float2Array => 8,
            Self::Float3Array => 12,
            Self::Float4Array => 16,
            Self::Float3x3Array => 36,
            Self::Float4x4Array => 64,
        }
    }
}
