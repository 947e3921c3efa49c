//! Vertex attribute semantics and wire-level component types.
//!
//! These two enums are the vocabulary shared by layouts and the codec:
//! [`AttributeSemantic`] says *what* a field means, [`ComponentType`] says
//! *how* each of its components is stored.

/// Semantic meaning of a vertex attribute.
///
/// The declaration order matches the native attribute slot order, so
/// [`index`](Self::index) can be handed to the native layer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeSemantic {
    /// Vertex position.
    Position,
    /// Vertex normal.
    Normal,
    /// Vertex tangent.
    Tangent,
    /// Vertex bitangent.
    Bitangent,
    /// Primary vertex color.
    Color0,
    /// Second vertex color set.
    Color1,
    /// Third vertex color set.
    Color2,
    /// Fourth vertex color set.
    Color3,
    /// Bone indices for skinning.
    Indices,
    /// Bone weights for skinning.
    Weight,
    /// Texture coordinates set 0.
    TexCoord0,
    /// Texture coordinates set 1.
    TexCoord1,
    /// Texture coordinates set 2.
    TexCoord2,
    /// Texture coordinates set 3.
    TexCoord3,
    /// Texture coordinates set 4.
    TexCoord4,
    /// Texture coordinates set 5.
    TexCoord5,
    /// Texture coordinates set 6.
    TexCoord6,
    /// Texture coordinates set 7.
    TexCoord7,
}

impl AttributeSemantic {
    /// Number of distinct semantics.
    pub const COUNT: usize = 18;

    /// All semantics in slot order.
    pub const ALL: [AttributeSemantic; Self::COUNT] = [
        Self::Position,
        Self::Normal,
        Self::Tangent,
        Self::Bitangent,
        Self::Color0,
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Indices,
        Self::Weight,
        Self::TexCoord0,
        Self::TexCoord1,
        Self::TexCoord2,
        Self::TexCoord3,
        Self::TexCoord4,
        Self::TexCoord5,
        Self::TexCoord6,
        Self::TexCoord7,
    ];

    /// Native slot index of this semantic.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Short human-readable name, used in error messages and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Tangent => "tangent",
            Self::Bitangent => "bitangent",
            Self::Color0 => "color0",
            Self::Color1 => "color1",
            Self::Color2 => "color2",
            Self::Color3 => "color3",
            Self::Indices => "indices",
            Self::Weight => "weight",
            Self::TexCoord0 => "texcoord0",
            Self::TexCoord1 => "texcoord1",
            Self::TexCoord2 => "texcoord2",
            Self::TexCoord3 => "texcoord3",
            Self::TexCoord4 => "texcoord4",
            Self::TexCoord5 => "texcoord5",
            Self::TexCoord6 => "texcoord6",
            Self::TexCoord7 => "texcoord7",
        }
    }
}

impl std::fmt::Display for AttributeSemantic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wire encoding of a single attribute component.
///
/// Multi-byte encodings are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentType {
    /// 8-bit unsigned integer. Normalized: `[0, 255]` ↔ `[0.0, 1.0]`.
    Uint8,
    /// 8-bit signed integer. Normalized: `[-127, 127]` ↔ `[-1.0, 1.0]`.
    Int8,
    /// 16-bit unsigned integer. Normalized: `[0, 65535]` ↔ `[0.0, 1.0]`.
    Uint16,
    /// 16-bit signed integer. Normalized: `[-32767, 32767]` ↔ `[-1.0, 1.0]`.
    Int16,
    /// IEEE 754 binary16 float. The normalized flag has no effect.
    Half,
    /// IEEE 754 binary32 float. The normalized flag has no effect.
    #[default]
    Float,
}

impl ComponentType {
    /// Size in bytes of one component.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint8 | Self::Int8 => 1,
            Self::Uint16 | Self::Int16 | Self::Half => 2,
            Self::Float => 4,
        }
    }

    /// Returns true if the encoding can represent negative values.
    pub fn is_signed(&self) -> bool {
        !matches!(self, Self::Uint8 | Self::Uint16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_slots_follow_native_order() {
        for (i, semantic) in AttributeSemantic::ALL.iter().enumerate() {
            assert_eq!(semantic.index(), i);
        }
        assert_eq!(AttributeSemantic::TexCoord7.index(), AttributeSemantic::COUNT - 1);
    }

    #[test]
    fn test_component_type_size() {
        assert_eq!(ComponentType::Uint8.size(), 1);
        assert_eq!(ComponentType::Int8.size(), 1);
        assert_eq!(ComponentType::Uint16.size(), 2);
        assert_eq!(ComponentType::Int16.size(), 2);
        assert_eq!(ComponentType::Half.size(), 2);
        assert_eq!(ComponentType::Float.size(), 4);
    }

    #[test]
    fn test_component_type_signedness() {
        assert!(!ComponentType::Uint8.is_signed());
        assert!(ComponentType::Int16.is_signed());
    }
}
