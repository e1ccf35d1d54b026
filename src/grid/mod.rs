//! Whole-domain grid construction.
//!
//! [`GridConfig`] describes the domain one axis at a time; building it
//! produces a [`BlockGrid`], which owns the three shared axis meshes and the
//! [`BlockMetadata`](crate::block::BlockMetadata) of every block of the
//! lattice.

mod block_grid;
mod config;

pub use block_grid::BlockGrid;
pub use config::{AxisConfig, GridConfig};
