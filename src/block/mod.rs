//! Per-block metadata.
//!
//! A [`BlockMetadata`] record ties a block identity and lattice coordinate to
//! its physical placement and answers position queries for the cells it
//! holds. Each axis is resolved independently:
//!
//! - uniform axes store one cell width and evaluate positions in closed form
//! - stretched axes share the [`AxisMesh`](crate::axis::AxisMesh) that owns
//!   their cell widths and sum the widths of this block only
//!
//! Blocks are built from an [`AxisSpec`] per axis, from three axis meshes
//! with [`BlockMetadata::from_meshes`], or with one scalar spacing through
//! [`BlockMetadata::uniform`].

mod metadata;
mod spacing;

pub use metadata::{BlockMetadata, LegacySpacing};
pub use spacing::{AxisGeometry, AxisSpacing, AxisSpec};
