//! Vertex layout description and vertex data conversion.
//!
//! This module provides:
//!
//! - [`AttributeSemantic`] / [`ComponentType`] - what a field means and how it is stored
//! - [`VertexLayoutBuilder`] / [`VertexLayout`] - describe and seal a vertex record
//! - [`codec`] - pack, unpack, and convert vertex data in caller-owned buffers
//!
//! Nothing here touches a rendering backend, so layouts and the codec can be
//! used before (or without) initializing one.

mod attribute;
pub mod codec;
mod error;
mod layout;

pub use attribute::{AttributeSemantic, ComponentType};
pub use codec::Float4;
pub use error::{Result, VertexError};
pub use layout::{MAX_STRIDE, VertexAttribute, VertexLayout, VertexLayoutBuilder};
