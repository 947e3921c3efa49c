//! Packing, unpacking, and converting vertex data through a [`VertexLayout`].
//!
//! All operations work on a semantic [`Float4`] value: every component type
//! widens losslessly (or within its rounding error) to `f32`. Components
//! beyond an attribute's declared count are ignored on write and read back as
//! `0.0`.
//!
//! The vertex buffer always belongs to the caller. Any `Pod` slice is
//! accepted and is viewed as bytes only for the duration of the call: either
//! raw bytes, or `#[repr(C)]` vertex structs whose size equals the layout
//! stride. Every precondition is checked before the first byte is written, so
//! a failed call never leaves a partial write behind.
//!
//! # Example
//!
//! ```
//! use vbridge_core::vertex::{codec, AttributeSemantic, VertexLayout};
//!
//! let layout = VertexLayout::position_color();
//! let mut vertices = vec![0u8; layout.size_for(3).unwrap()];
//!
//! codec::pack([1.0, 0.5, 0.0, 1.0], AttributeSemantic::Color0, &layout, &mut vertices, 2)?;
//! let color = codec::unpack(AttributeSemantic::Color0, &layout, &vertices, 2)?;
//! assert!((color[1] - 0.5).abs() <= 1.0 / 255.0);
//! # Ok::<(), vbridge_core::vertex::VertexError>(())
//! ```

use bytemuck::Pod;
use half::f16;

use super::attribute::{AttributeSemantic, ComponentType};
use super::error::{Result, VertexError};
use super::layout::{VertexAttribute, VertexLayout};

/// Semantic value exchanged with the codec.
pub type Float4 = [f32; 4];

/// Encode `value` into the `semantic` field of vertex `index`.
///
/// Normalized integer fields clamp out-of-range values to the representable
/// extremes.
///
/// # Errors
///
/// - [`VertexError::InvalidArgument`] if `T` is neither a byte nor exactly one
///   vertex wide.
/// - [`VertexError::UnknownAttribute`] if the layout lacks `semantic`.
/// - [`VertexError::BufferTooSmall`] if `vertices` cannot hold vertex `index`.
pub fn pack<T: Pod>(
    value: Float4,
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    vertices: &mut [T],
    index: usize,
) -> Result<()> {
    pack_impl(value, false, semantic, layout, vertices, index)
}

/// Like [`pack`], but `value` is in `[-1, 1]`.
///
/// For unsigned normalized fields each component is remapped to `[0, 1]`
/// (`v * 0.5 + 0.5`) before encoding, which is how normals and tangents are
/// usually squeezed into `Uint8` fields. Other fields encode unchanged.
///
/// # Errors
///
/// Same as [`pack`].
pub fn pack_signed<T: Pod>(
    value: Float4,
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    vertices: &mut [T],
    index: usize,
) -> Result<()> {
    pack_impl(value, true, semantic, layout, vertices, index)
}

/// Decode the `semantic` field of vertex `index`.
///
/// # Errors
///
/// - [`VertexError::InvalidArgument`] if `T` is neither a byte nor exactly one
///   vertex wide.
/// - [`VertexError::UnknownAttribute`] if the layout lacks `semantic`.
/// - [`VertexError::BufferTooSmall`] if `vertices` cannot hold vertex `index`.
pub fn unpack<T: Pod>(
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    vertices: &[T],
    index: usize,
) -> Result<Float4> {
    unpack_impl(false, semantic, layout, vertices, index)
}

/// Inverse of [`pack_signed`]: unsigned normalized fields are remapped from
/// `[0, 1]` back to `[-1, 1]`.
///
/// # Errors
///
/// Same as [`unpack`].
pub fn unpack_signed<T: Pod>(
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    vertices: &[T],
    index: usize,
) -> Result<Float4> {
    unpack_impl(true, semantic, layout, vertices, index)
}

/// Reformat `vertex_count` vertices from `src_layout` into `dst_layout`.
///
/// Every attribute present in both layouts is decoded from the source and
/// re-encoded into the destination. Fields with identical encodings are
/// copied byte for byte. Source-only attributes are dropped; destination-only
/// attributes keep whatever bytes `dst` already held.
///
/// # Errors
///
/// - [`VertexError::InvalidArgument`] if an element type is neither a byte
///   nor exactly one vertex of its layout wide.
/// - [`VertexError::SizeMismatch`] if either buffer's length differs from
///   `vertex_count * stride`.
///
/// Nothing is written in either case.
pub fn convert<D: Pod, S: Pod>(
    dst_layout: &VertexLayout,
    dst: &mut [D],
    src_layout: &VertexLayout,
    src: &[S],
    vertex_count: usize,
) -> Result<()> {
    check_element_size::<D>("destination", dst_layout)?;
    check_element_size::<S>("source", src_layout)?;

    let dst = bytes_of_mut(dst)?;
    let src = bytes_of(src)?;

    check_exact_size("destination", dst_layout, dst.len(), vertex_count)?;
    check_exact_size("source", src_layout, src.len(), vertex_count)?;

    let dst_stride = dst_layout.stride() as usize;
    let src_stride = src_layout.stride() as usize;
    // A zero stride means the layout has no fields, so nothing is shared.
    if vertex_count == 0 || dst_stride == 0 || src_stride == 0 {
        return Ok(());
    }

    for (dst_vertex, src_vertex) in dst
        .chunks_exact_mut(dst_stride)
        .zip(src.chunks_exact(src_stride))
    {
        for dst_attr in dst_layout.attributes() {
            let Some(src_attr) = src_layout.attribute(dst_attr.semantic) else {
                continue;
            };
            let src_field = &src_vertex[src_attr.offset as usize..src_attr.end()];
            let dst_field = &mut dst_vertex[dst_attr.offset as usize..dst_attr.end()];

            if dst_attr.same_encoding(src_attr) {
                dst_field.copy_from_slice(src_field);
            } else {
                let value = decode_field(src_attr, src_field);
                encode_field(dst_attr, &value, dst_field);
            }
        }
    }

    Ok(())
}

fn pack_impl<T: Pod>(
    mut value: Float4,
    signed_input: bool,
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    vertices: &mut [T],
    index: usize,
) -> Result<()> {
    check_element_size::<T>("vertex", layout)?;
    let bytes = bytes_of_mut(vertices)?;
    let (attr, start) = locate(semantic, layout, bytes.len(), index)?;

    if signed_input && is_unsigned_normalized(attr) {
        for v in value.iter_mut().take(attr.count as usize) {
            *v = *v * 0.5 + 0.5;
        }
    }

    encode_field(attr, &value, &mut bytes[start..start + attr.size()]);
    Ok(())
}

fn unpack_impl<T: Pod>(
    signed_output: bool,
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    vertices: &[T],
    index: usize,
) -> Result<Float4> {
    check_element_size::<T>("vertex", layout)?;
    let bytes = bytes_of(vertices)?;
    let (attr, start) = locate(semantic, layout, bytes.len(), index)?;

    let mut value = decode_field(attr, &bytes[start..start + attr.size()]);
    if signed_output && is_unsigned_normalized(attr) {
        for v in value.iter_mut().take(attr.count as usize) {
            *v = *v * 2.0 - 1.0;
        }
    }

    Ok(value)
}

/// Resolve the field for `semantic` and the byte offset of vertex `index`'s
/// copy of it, checking that the buffer covers the whole vertex record.
fn locate(
    semantic: AttributeSemantic,
    layout: &VertexLayout,
    len: usize,
    index: usize,
) -> Result<(&VertexAttribute, usize)> {
    let attr = layout
        .attribute(semantic)
        .ok_or(VertexError::UnknownAttribute(semantic))?;

    let stride = layout.stride() as usize;
    let required = index
        .checked_add(1)
        .and_then(|count| count.checked_mul(stride))
        .unwrap_or(usize::MAX);
    if len < required {
        return Err(VertexError::BufferTooSmall {
            required,
            actual: len,
        });
    }

    Ok((attr, index * stride + attr.offset as usize))
}

fn check_exact_size(
    buffer: &'static str,
    layout: &VertexLayout,
    actual: usize,
    vertex_count: usize,
) -> Result<()> {
    match layout.size_for(vertex_count) {
        Some(expected) if expected == actual => Ok(()),
        expected => Err(VertexError::SizeMismatch {
            buffer,
            expected: expected.unwrap_or(usize::MAX),
            actual,
        }),
    }
}

/// Typed buffers must hold exactly one vertex per element; byte buffers are
/// addressed through the stride.
fn check_element_size<T: Pod>(buffer: &'static str, layout: &VertexLayout) -> Result<()> {
    let element = std::mem::size_of::<T>();
    if element == 1 || element == layout.stride() as usize {
        return Ok(());
    }
    Err(VertexError::InvalidArgument(format!(
        "{buffer} buffer element is {element} bytes but the layout stride is {}",
        layout.stride()
    )))
}

fn bytes_of<T: Pod>(vertices: &[T]) -> Result<&[u8]> {
    bytemuck::try_cast_slice(vertices).map_err(|e| {
        VertexError::InvalidArgument(format!("vertex buffer cannot be viewed as bytes: {e:?}"))
    })
}

fn bytes_of_mut<T: Pod>(vertices: &mut [T]) -> Result<&mut [u8]> {
    bytemuck::try_cast_slice_mut(vertices).map_err(|e| {
        VertexError::InvalidArgument(format!("vertex buffer cannot be viewed as bytes: {e:?}"))
    })
}

fn is_unsigned_normalized(attr: &VertexAttribute) -> bool {
    attr.normalized && !attr.ty.is_signed()
}

// ============================================================================
// Component encoding
// ============================================================================

fn encode_field(attr: &VertexAttribute, value: &Float4, out: &mut [u8]) {
    let width = attr.ty.size();
    for (component, chunk) in value
        .iter()
        .take(attr.count as usize)
        .zip(out.chunks_exact_mut(width))
    {
        encode_component(attr.ty, attr.normalized, *component, chunk);
    }
}

fn decode_field(attr: &VertexAttribute, bytes: &[u8]) -> Float4 {
    let mut value = [0.0; 4];
    let width = attr.ty.size();
    for (component, chunk) in value
        .iter_mut()
        .take(attr.count as usize)
        .zip(bytes.chunks_exact(width))
    {
        *component = decode_component(attr.ty, attr.normalized, chunk);
    }
    value
}

// Float-to-int `as` casts saturate and map NaN to zero.
fn encode_component(ty: ComponentType, normalized: bool, v: f32, out: &mut [u8]) {
    match ty {
        ComponentType::Uint8 => {
            let raw = if normalized {
                unorm(v, 255.0)
            } else {
                v.round()
            };
            out[0] = raw as u8;
        }
        ComponentType::Int8 => {
            let raw = if normalized {
                snorm(v, 127.0)
            } else {
                v.round()
            };
            out[0] = (raw as i8) as u8;
        }
        ComponentType::Uint16 => {
            let raw = if normalized {
                unorm(v, 65535.0)
            } else {
                v.round()
            };
            out.copy_from_slice(&(raw as u16).to_le_bytes());
        }
        ComponentType::Int16 => {
            let raw = if normalized {
                snorm(v, 32767.0)
            } else {
                v.round()
            };
            out.copy_from_slice(&(raw as i16).to_le_bytes());
        }
        ComponentType::Half => out.copy_from_slice(&f16::from_f32(v).to_le_bytes()),
        ComponentType::Float => out.copy_from_slice(&v.to_le_bytes()),
    }
}

fn decode_component(ty: ComponentType, normalized: bool, bytes: &[u8]) -> f32 {
    match ty {
        ComponentType::Uint8 => {
            let raw = bytes[0] as f32;
            if normalized {
                raw / 255.0
            } else {
                raw
            }
        }
        ComponentType::Int8 => {
            let raw = bytes[0] as i8 as f32;
            if normalized {
                (raw / 127.0).max(-1.0)
            } else {
                raw
            }
        }
        ComponentType::Uint16 => {
            let raw = u16::from_le_bytes([bytes[0], bytes[1]]) as f32;
            if normalized {
                raw / 65535.0
            } else {
                raw
            }
        }
        ComponentType::Int16 => {
            let raw = i16::from_le_bytes([bytes[0], bytes[1]]) as f32;
            if normalized {
                (raw / 32767.0).max(-1.0)
            } else {
                raw
            }
        }
        ComponentType::Half => f16::from_le_bytes([bytes[0], bytes[1]]).to_f32(),
        ComponentType::Float => f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    }
}

fn unorm(v: f32, scale: f32) -> f32 {
    (v.clamp(0.0, 1.0) * scale).round()
}

fn snorm(v: f32, scale: f32) -> f32 {
    (v.clamp(-1.0, 1.0) * scale).round()
}
