//! Per-axis grid construction.
//!
//! Each spatial axis of the block lattice is partitioned into
//! `n_blocks * cells_per_block` interior cells whose widths come from a
//! pluggable [`DensityDistribution`]. The resulting [`AxisMesh`] answers
//! "how wide is cell i?", "how wide is block k?" and "where does block k
//! start?" for the whole axis.
//!
//! # Density Distributions
//!
//! - [`UniformDensity`]: Equal widths; block metadata uses the closed-form
//!   position path on such axes
//! - [`ClusteredDensity`]: Gaussian-profile refinement around the centre
//!
//! Custom distributions implement [`DensityDistribution`]; the mesh keeps only
//! the resulting tables and the uniformity flag.
//!
//! # Ghost Cells
//!
//! Stencil halos need spacing past both ends of the domain. Ghost widths are
//! computed from the same density profile and stored next to the interior
//! widths, without changing the interior cell count:
//!
//! ```
//! use blockgrid::axis::{AxisLayout, GhostCells, UniformDensity};
//!
//! let mesh = AxisLayout::from_bounds(0.0, 10.0, 5, 2)
//!     .unwrap()
//!     .init(&UniformDensity, GhostCells::symmetric(3))
//!     .unwrap();
//!
//! assert_eq!(mesh.n_cells(), 10);
//! assert!(mesh.cell_widths().iter().all(|&w| w == 1.0));
//! assert_eq!(mesh.ghost_widths().start().len(), 3);
//! ```

mod density;
mod ghost;
mod mesh;

pub(crate) use mesh::center_offset;

pub use density::{ClusteredDensity, DensityDistribution, DensityKind, UniformDensity};
pub use ghost::{GhostCells, GhostWidths};
pub use mesh::{AxisLayout, AxisMesh, MASS_TOLERANCE, STRETCH_WARN_RATIO};
