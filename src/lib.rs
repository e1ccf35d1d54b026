//! # blockgrid
//!
//! Geometry of block-structured grids with optionally non-uniform spacing.
//!
//! This crate provides:
//! - Per-axis meshes whose cell widths follow a pluggable density
//!   distribution (uniform or clustered), with ghost widths for stencil halos
//! - Block metadata answering cell-centre position queries, in closed form on
//!   uniform axes and by summation on stretched ones
//! - A declarative grid configuration building the three axis meshes and the
//!   metadata of every block of the lattice
//!
//! ```
//! use blockgrid::{BlockCoord, GridConfig};
//!
//! let grid = GridConfig::cube(4, 2).build().unwrap();
//! let block = grid.block(BlockCoord::new(0, 0, 0));
//!
//! assert_eq!(block.origin(), [0.0, 0.0, 0.0]);
//! assert_eq!(block.position(0, 0, 0), [0.0625, 0.0625, 0.0625]);
//! ```

pub mod axis;
pub mod block;
pub mod error;
pub mod grid;
pub mod types;

// Re-export main types for convenience
pub use axis::{
    AxisLayout, AxisMesh, ClusteredDensity, DensityDistribution, DensityKind, GhostCells,
    GhostWidths, UniformDensity,
};
pub use block::{AxisGeometry, AxisSpacing, AxisSpec, BlockMetadata, LegacySpacing};
pub use error::{GridError, Result};
pub use grid::{AxisConfig, BlockGrid, GridConfig};
pub use types::{Axis, BlockCoord, BlockId, BlockLattice, Interval, PayloadHandle, PerAxis};
