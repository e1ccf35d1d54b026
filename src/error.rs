//! Error types for grid construction.
//!
//! Only construction can fail. Queries on a built mesh treat bad indices as
//! programming errors and panic instead.

use thiserror::Error;

use crate::types::Axis;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building axis meshes and block metadata.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GridError {
    /// Domain bounds are not finite or do not have a positive extent.
    #[error("Invalid domain [{start}, {end}): extent must be finite and positive")]
    InvalidExtent { start: f64, end: f64 },

    /// An axis needs at least one block.
    #[error("Block count must be positive")]
    ZeroBlocks,

    /// A block needs at least one cell.
    #[error("Cells per block must be positive")]
    ZeroCellsPerBlock,

    /// The interior cell count of an axis does not fit in `usize`.
    #[error("Cell count overflows: {n_blocks} blocks of {cells_per_block} cells")]
    CellCountOverflow {
        n_blocks: usize,
        cells_per_block: usize,
    },

    /// A density distribution parameter is out of range.
    #[error("Invalid {distribution} parameter {name} = {value}")]
    InvalidDensityParameter {
        distribution: &'static str,
        name: &'static str,
        value: f64,
    },

    /// A computed cell width is not finite and positive.
    #[error("Degenerate cell width {width} at cell {cell} ({distribution})")]
    DegenerateWidth {
        distribution: String,
        cell: usize,
        width: f64,
    },

    /// A computed ghost width is not finite and positive.
    #[error("Degenerate ghost width {width} at ghost {ghost} ({distribution})")]
    DegenerateGhostWidth {
        distribution: String,
        ghost: usize,
        width: f64,
    },

    /// Interior widths do not add up to the domain extent.
    #[error("Cell widths sum to {actual}, expected {expected} ({distribution})")]
    MassConservation {
        distribution: String,
        expected: f64,
        actual: f64,
    },

    /// Building one axis of a grid failed.
    #[error("Axis {axis}: {source}")]
    Axis {
        axis: Axis,
        #[source]
        source: Box<GridError>,
    },
}

impl GridError {
    /// Create an invalid density parameter error.
    pub fn invalid_parameter(distribution: &'static str, name: &'static str, value: f64) -> Self {
        Self::InvalidDensityParameter {
            distribution,
            name,
            value,
        }
    }

    /// Attach the axis on which this error occurred.
    pub fn on_axis(self, axis: Axis) -> Self {
        Self::Axis {
            axis,
            source: Box::new(self),
        }
    }
}
