//! Vertex layout definitions.
//!
//! A vertex layout describes the binary structure of one interleaved vertex
//! record: which attributes it carries, how each component is encoded, where
//! each field starts, and the total stride.
//!
//! Layouts are built field by field with a [`VertexLayoutBuilder`] and then
//! sealed into an immutable [`VertexLayout`]. Sealed layouts are usually
//! wrapped in `Arc` and shared by every buffer that uses them, since a program
//! typically needs only a handful of distinct layouts.
//!
//! # Example
//!
//! ```
//! use vbridge_core::vertex::{AttributeSemantic, ComponentType, VertexLayout};
//!
//! let layout = VertexLayout::builder()
//!     .add(AttributeSemantic::Position, 3, ComponentType::Float, false)?
//!     .add(AttributeSemantic::Color0, 4, ComponentType::Uint8, true)?
//!     .seal();
//!
//! assert_eq!(layout.stride(), 16);
//! assert_eq!(layout.offset(AttributeSemantic::Color0), Some(12));
//! assert_eq!(layout.offset(AttributeSemantic::Normal), None);
//! # Ok::<(), vbridge_core::vertex::VertexError>(())
//! ```

use std::sync::Arc;

use super::attribute::{AttributeSemantic, ComponentType};
use super::error::{Result, VertexError};

/// Largest stride the native layer can express (its stride field is 16-bit).
pub const MAX_STRIDE: u32 = u16::MAX as u32;

/// Field descriptor for a single attribute inside a vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: AttributeSemantic,
    /// Encoding of each component.
    pub ty: ComponentType,
    /// Number of components (1..=4).
    pub count: u8,
    /// Whether integer components map to the unit range.
    pub normalized: bool,
    /// Byte offset within the vertex record.
    pub offset: u32,
}

impl VertexAttribute {
    /// Size in bytes of this field.
    pub fn size(&self) -> usize {
        self.ty.size() * self.count as usize
    }

    /// Byte offset one past the end of this field.
    pub fn end(&self) -> usize {
        self.offset as usize + self.size()
    }

    /// Returns true if both fields store their components identically,
    /// regardless of where in the record they live.
    pub fn same_encoding(&self, other: &VertexAttribute) -> bool {
        self.ty == other.ty && self.count == other.count && self.normalized == other.normalized
    }
}

/// Builder for an unsealed vertex layout.
///
/// Fields without an explicit offset are packed tightly at the running
/// cursor, so default-placed fields never overlap.
#[derive(Debug, Clone)]
pub struct VertexLayoutBuilder {
    slots: [Option<VertexAttribute>; AttributeSemantic::COUNT],
    order: Vec<AttributeSemantic>,
    cursor: u32,
    label: Option<String>,
}

impl VertexLayoutBuilder {
    /// Start a new, empty layout.
    pub fn begin() -> Self {
        Self {
            slots: [None; AttributeSemantic::COUNT],
            order: Vec::new(),
            cursor: 0,
            label: None,
        }
    }

    /// Append (or overwrite) the field for `semantic` at the running cursor.
    ///
    /// # Errors
    ///
    /// [`VertexError::InvalidArgument`] if `count` is outside `1..=4` or the
    /// record would grow past [`MAX_STRIDE`].
    pub fn add(
        self,
        semantic: AttributeSemantic,
        count: u8,
        ty: ComponentType,
        normalized: bool,
    ) -> Result<Self> {
        self.place(semantic, count, ty, normalized, None)
    }

    /// Append (or overwrite) the field for `semantic` at an explicit offset.
    ///
    /// Explicit offsets are not checked for overlap. The cursor moves past
    /// the field if it ends beyond the current cursor.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn add_at(
        self,
        semantic: AttributeSemantic,
        count: u8,
        ty: ComponentType,
        normalized: bool,
        offset: u32,
    ) -> Result<Self> {
        self.place(semantic, count, ty, normalized, Some(offset))
    }

    /// Insert `bytes` of padding at the cursor.
    ///
    /// # Errors
    ///
    /// [`VertexError::InvalidArgument`] if the record would grow past
    /// [`MAX_STRIDE`].
    pub fn skip(mut self, bytes: u32) -> Result<Self> {
        self.cursor = self
            .cursor
            .checked_add(bytes)
            .filter(|end| *end <= MAX_STRIDE)
            .ok_or_else(|| {
                VertexError::InvalidArgument(format!(
                    "skipping {bytes} bytes exceeds the maximum stride {MAX_STRIDE}"
                ))
            })?;
        Ok(self)
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Smallest stride that covers every field and padding added so far.
    pub fn min_stride(&self) -> u32 {
        self.cursor
    }

    /// Seal the layout with the minimum stride.
    pub fn seal(self) -> VertexLayout {
        let stride = self.min_stride();
        self.finish(stride)
    }

    /// Seal the layout with an explicit stride (for trailing padding).
    ///
    /// # Errors
    ///
    /// [`VertexError::InvalidArgument`] if `stride` is smaller than
    /// [`min_stride`](Self::min_stride) or larger than [`MAX_STRIDE`].
    pub fn seal_with_stride(self, stride: u32) -> Result<VertexLayout> {
        if stride < self.min_stride() {
            return Err(VertexError::InvalidArgument(format!(
                "stride {stride} is smaller than the required {}",
                self.min_stride()
            )));
        }
        if stride > MAX_STRIDE {
            return Err(VertexError::InvalidArgument(format!(
                "stride {stride} exceeds the maximum {MAX_STRIDE}"
            )));
        }
        Ok(self.finish(stride))
    }

    fn place(
        mut self,
        semantic: AttributeSemantic,
        count: u8,
        ty: ComponentType,
        normalized: bool,
        offset: Option<u32>,
    ) -> Result<Self> {
        if !(1..=4).contains(&count) {
            return Err(VertexError::InvalidArgument(format!(
                "component count {count} for {semantic} is outside 1..=4"
            )));
        }

        let offset = offset.unwrap_or(self.cursor);
        let size = (ty.size() * count as usize) as u32;
        let end = offset
            .checked_add(size)
            .filter(|end| *end <= MAX_STRIDE)
            .ok_or_else(|| {
                VertexError::InvalidArgument(format!(
                    "{semantic} at offset {offset} exceeds the maximum stride {MAX_STRIDE}"
                ))
            })?;

        let slot = &mut self.slots[semantic.index()];
        if slot.is_none() {
            self.order.push(semantic);
        }
        *slot = Some(VertexAttribute {
            semantic,
            ty,
            count,
            normalized,
            offset,
        });
        self.cursor = self.cursor.max(end);

        Ok(self)
    }

    fn finish(self, stride: u32) -> VertexLayout {
        log::debug!(
            "VertexLayout: sealed {:?} with {} attributes, stride {}",
            self.label,
            self.order.len(),
            stride
        );
        VertexLayout {
            slots: self.slots,
            order: self.order,
            stride,
            label: self.label,
        }
    }
}

impl Default for VertexLayoutBuilder {
    fn default() -> Self {
        Self::begin()
    }
}

/// An immutable, sealed vertex layout.
///
/// Lookups by semantic are constant time, so the codec can consult the
/// layout on every call without revalidating its structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    slots: [Option<VertexAttribute>; AttributeSemantic::COUNT],
    order: Vec<AttributeSemantic>,
    stride: u32,
    label: Option<String>,
}

impl VertexLayout {
    /// Start building a new layout.
    pub fn builder() -> VertexLayoutBuilder {
        VertexLayoutBuilder::begin()
    }

    /// Total byte size of one vertex record.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Byte offset of `semantic`, or `None` if the layout lacks it.
    pub fn offset(&self, semantic: AttributeSemantic) -> Option<u32> {
        self.attribute(semantic).map(|attr| attr.offset)
    }

    /// Check if this layout has a field for `semantic`.
    pub fn has(&self, semantic: AttributeSemantic) -> bool {
        self.slots[semantic.index()].is_some()
    }

    /// Get the field descriptor for `semantic`.
    pub fn attribute(&self, semantic: AttributeSemantic) -> Option<&VertexAttribute> {
        self.slots[semantic.index()].as_ref()
    }

    /// Iterate over the fields in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &VertexAttribute> + '_ {
        self.order
            .iter()
            .filter_map(|semantic| self.slots[semantic.index()].as_ref())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Debug label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Byte size of a buffer holding `vertex_count` records, or `None` on
    /// overflow.
    pub fn size_for(&self, vertex_count: usize) -> Option<usize> {
        (self.stride as usize).checked_mul(vertex_count)
    }

    /// Check if this layout is compatible with another layout.
    ///
    /// A layout is compatible if the other layout has every semantic this one
    /// has, with the same encoding. Offsets and strides may differ.
    pub fn is_compatible_with(&self, other: &VertexLayout) -> bool {
        self.attributes().all(|attr| {
            other
                .attribute(attr.semantic)
                .is_some_and(|theirs| attr.same_encoding(theirs))
        })
    }

    /// Build a tightly packed layout from constant field lists.
    fn preset(label: &str, fields: &[(AttributeSemantic, u8, ComponentType, bool)]) -> Self {
        let mut slots = [None; AttributeSemantic::COUNT];
        let mut order = Vec::with_capacity(fields.len());
        let mut offset = 0u32;

        for &(semantic, count, ty, normalized) in fields {
            debug_assert!((1..=4).contains(&count));
            slots[semantic.index()] = Some(VertexAttribute {
                semantic,
                ty,
                count,
                normalized,
                offset,
            });
            order.push(semantic);
            offset += (ty.size() * count as usize) as u32;
        }

        Self {
            slots,
            order,
            stride: offset,
            label: Some(label.to_string()),
        }
    }
}

// Layouts are shared read-only across threads
static_assertions::assert_impl_all!(VertexLayout: Send, Sync);

// ============================================================================
// Common Layouts
// ============================================================================

impl VertexLayout {
    /// Position-only layout (12 bytes per vertex).
    pub fn position_only() -> Arc<Self> {
        Arc::new(Self::preset(
            "position_only",
            &[(AttributeSemantic::Position, 3, ComponentType::Float, false)],
        ))
    }

    /// Position + packed RGBA8 color (16 bytes per vertex).
    pub fn position_color() -> Arc<Self> {
        Arc::new(Self::preset(
            "position_color",
            &[
                (AttributeSemantic::Position, 3, ComponentType::Float, false),
                (AttributeSemantic::Color0, 4, ComponentType::Uint8, true),
            ],
        ))
    }

    /// Position + normal + texcoord (32 bytes per vertex).
    pub fn position_normal_uv() -> Arc<Self> {
        Arc::new(Self::preset(
            "position_normal_uv",
            &[
                (AttributeSemantic::Position, 3, ComponentType::Float, false),
                (AttributeSemantic::Normal, 3, ComponentType::Float, false),
                (AttributeSemantic::TexCoord0, 2, ComponentType::Float, false),
            ],
        ))
    }

    /// Full PBR layout: position + normal + tangent + texcoord (48 bytes).
    pub fn pbr() -> Arc<Self> {
        Arc::new(Self::preset(
            "pbr",
            &[
                (AttributeSemantic::Position, 3, ComponentType::Float, false),
                (AttributeSemantic::Normal, 3, ComponentType::Float, false),
                (AttributeSemantic::Tangent, 4, ComponentType::Float, false),
                (AttributeSemantic::TexCoord0, 2, ComponentType::Float, false),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets_pack_tightly() {
        let layout = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap()
            .add(AttributeSemantic::Normal, 4, ComponentType::Int8, true)
            .unwrap()
            .add(AttributeSemantic::TexCoord0, 2, ComponentType::Half, false)
            .unwrap()
            .seal();

        assert_eq!(layout.offset(AttributeSemantic::Position), Some(0));
        assert_eq!(layout.offset(AttributeSemantic::Normal), Some(12));
        assert_eq!(layout.offset(AttributeSemantic::TexCoord0), Some(16));
        assert_eq!(layout.stride(), 20);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_component_count_out_of_range() {
        let result =
            VertexLayout::builder().add(AttributeSemantic::Position, 0, ComponentType::Float, false);
        assert!(matches!(result, Err(VertexError::InvalidArgument(_))));

        let result =
            VertexLayout::builder().add(AttributeSemantic::Position, 5, ComponentType::Float, false);
        assert!(matches!(result, Err(VertexError::InvalidArgument(_))));
    }

    #[test]
    fn test_overwrite_keeps_insertion_position() {
        let layout = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap()
            .add(AttributeSemantic::Color0, 4, ComponentType::Uint8, true)
            .unwrap()
            .add(AttributeSemantic::Position, 2, ComponentType::Half, false)
            .unwrap()
            .seal();

        let order: Vec<_> = layout.attributes().map(|a| a.semantic).collect();
        assert_eq!(
            order,
            vec![AttributeSemantic::Position, AttributeSemantic::Color0]
        );

        let position = layout.attribute(AttributeSemantic::Position).unwrap();
        assert_eq!(position.ty, ComponentType::Half);
        assert_eq!(position.offset, 16);
        assert_eq!(layout.stride(), 20);
    }

    #[test]
    fn test_explicit_offset_moves_cursor() {
        let layout = VertexLayout::builder()
            .add_at(AttributeSemantic::TexCoord0, 2, ComponentType::Float, false, 8)
            .unwrap()
            .add(AttributeSemantic::Position, 2, ComponentType::Float, false)
            .unwrap()
            .seal();

        assert_eq!(layout.offset(AttributeSemantic::TexCoord0), Some(8));
        assert_eq!(layout.offset(AttributeSemantic::Position), Some(16));
        assert_eq!(layout.stride(), 24);
    }

    #[test]
    fn test_skip_inserts_padding() {
        let layout = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap()
            .skip(4)
            .unwrap()
            .add(AttributeSemantic::TexCoord0, 2, ComponentType::Float, false)
            .unwrap()
            .seal();

        assert_eq!(layout.offset(AttributeSemantic::TexCoord0), Some(16));
        assert_eq!(layout.stride(), 24);
    }

    #[test]
    fn test_seal_with_stride() {
        let builder = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap();

        let padded = builder.clone().seal_with_stride(16).unwrap();
        assert_eq!(padded.stride(), 16);

        let result = builder.clone().seal_with_stride(8);
        assert!(matches!(result, Err(VertexError::InvalidArgument(_))));

        let result = builder.seal_with_stride(MAX_STRIDE + 1);
        assert!(matches!(result, Err(VertexError::InvalidArgument(_))));
    }

    #[test]
    fn test_max_stride_enforced() {
        let result = VertexLayout::builder()
            .add_at(AttributeSemantic::Position, 4, ComponentType::Float, false, MAX_STRIDE - 8);
        assert!(matches!(result, Err(VertexError::InvalidArgument(_))));

        let result = VertexLayout::builder().skip(MAX_STRIDE + 1);
        assert!(matches!(result, Err(VertexError::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_semantic_queries() {
        let layout = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap()
            .seal();

        assert!(layout.has(AttributeSemantic::Position));
        assert!(!layout.has(AttributeSemantic::Bitangent));
        assert_eq!(layout.offset(AttributeSemantic::Bitangent), None);
        assert!(layout.attribute(AttributeSemantic::Bitangent).is_none());
    }

    #[test]
    fn test_size_for() {
        let layout = VertexLayout::position_color();
        assert_eq!(layout.size_for(10), Some(160));
        assert_eq!(layout.size_for(usize::MAX), None);
    }

    #[test]
    fn test_layout_compatibility() {
        let required = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap()
            .seal();

        // Same encoding at a different offset
        let provided = VertexLayout::builder()
            .add(AttributeSemantic::Color0, 4, ComponentType::Uint8, true)
            .unwrap()
            .add(AttributeSemantic::Position, 3, ComponentType::Float, false)
            .unwrap()
            .seal();

        assert!(required.is_compatible_with(&provided));
        assert!(!provided.is_compatible_with(&required));

        let half_positions = VertexLayout::builder()
            .add(AttributeSemantic::Position, 3, ComponentType::Half, false)
            .unwrap()
            .seal();
        assert!(!required.is_compatible_with(&half_positions));
    }

    #[test]
    fn test_common_layouts() {
        assert_eq!(VertexLayout::position_only().stride(), 12);
        assert_eq!(VertexLayout::position_color().stride(), 16);
        assert_eq!(VertexLayout::position_normal_uv().stride(), 32);

        let pbr = VertexLayout::pbr();
        assert_eq!(pbr.stride(), 48);
        assert_eq!(pbr.len(), 4);
        assert_eq!(pbr.offset(AttributeSemantic::TexCoord0), Some(40));
        assert_eq!(pbr.label(), Some("pbr"));
    }
}
