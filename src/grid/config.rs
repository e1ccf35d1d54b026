//! Declarative grid configuration.

use std::sync::Arc;

use tracing::info;

use super::BlockGrid;
use crate::axis::{AxisLayout, AxisMesh, DensityKind, GhostCells};
use crate::error::{GridError, Result};
use crate::types::{Axis, Interval, PerAxis};

/// Configuration of one axis of the block lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConfig {
    /// Physical start of the axis
    pub start: f64,
    /// Physical end of the axis
    pub end: f64,
    /// Number of blocks along the axis
    pub blocks: usize,
    /// Cell-density distribution
    #[cfg_attr(feature = "serde", serde(default))]
    pub density: DensityKind,
    /// Ghost cells computed past both ends
    #[cfg_attr(feature = "serde", serde(default))]
    pub ghosts: GhostCells,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
            blocks: 1,
            density: DensityKind::Uniform,
            ghosts: GhostCells::NONE,
        }
    }
}

impl AxisConfig {
    /// Uniform axis over `[start, end)` split into `blocks` blocks.
    pub fn new(start: f64, end: f64, blocks: usize) -> Self {
        Self {
            start,
            end,
            blocks,
            ..Self::default()
        }
    }

    /// Set the density distribution.
    #[must_use]
    pub fn with_density(mut self, density: impl Into<DensityKind>) -> Self {
        self.density = density.into();
        self
    }

    /// Set the ghost-cell counts.
    #[must_use]
    pub fn with_ghosts(mut self, ghosts: GhostCells) -> Self {
        self.ghosts = ghosts;
        self
    }

    fn layout(&self, cells_per_block: usize) -> Result<AxisLayout> {
        AxisLayout::new(Interval::new(self.start, self.end)?, self.blocks, cells_per_block)
    }

    /// Check bounds, counts and density parameters without computing widths.
    ///
    /// # Errors
    ///
    /// The first problem found, as [`AxisLayout::new`] or
    /// [`DensityDistribution::validate`](crate::axis::DensityDistribution::validate)
    /// report it.
    pub fn validate(&self, cells_per_block: usize) -> Result<()> {
        self.layout(cells_per_block)?;
        self.density.build().validate()
    }

    /// Build the axis mesh.
    ///
    /// # Errors
    ///
    /// Any error of [`AxisLayout::new`] or [`AxisLayout::init`].
    pub fn build_mesh(&self, cells_per_block: usize) -> Result<AxisMesh> {
        let density = self.density.build();
        self.layout(cells_per_block)?
            .init(density.as_ref(), self.ghosts)
    }
}

/// Configuration of a whole block grid.
///
/// All blocks hold the same number of cells along every axis; the number of
/// blocks, the bounds and the density are set per axis.
///
/// # Example
///
/// ```
/// use blockgrid::axis::DensityKind;
/// use blockgrid::grid::{AxisConfig, GridConfig};
/// use blockgrid::types::Axis;
///
/// let grid = GridConfig::default()
///     .with_cells_per_block(4)
///     .with_axis(Axis::X, AxisConfig::new(0.0, 2.0, 4))
///     .with_axis(
///         Axis::Z,
///         AxisConfig::new(-1.0, 1.0, 2).with_density(DensityKind::Clustered { a: 1.0, b: 0.25 }),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(grid.n_blocks(), 8);
/// assert!(grid.axis_mesh(Axis::X).is_uniform());
/// assert!(!grid.axis_mesh(Axis::Z).is_uniform());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Cells per block along every axis
    pub cells_per_block: usize,
    /// Per-axis settings
    pub axes: PerAxis<AxisConfig>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cells_per_block: 8,
            axes: PerAxis::splat(AxisConfig::default()),
        }
    }
}

impl GridConfig {
    /// Unit cube split into `blocks` blocks per axis.
    pub fn cube(blocks: usize, cells_per_block: usize) -> Self {
        Self {
            cells_per_block,
            axes: PerAxis::splat(AxisConfig::new(0.0, 1.0, blocks)),
        }
    }

    /// Set the cells per block.
    #[must_use]
    pub fn with_cells_per_block(mut self, cells_per_block: usize) -> Self {
        self.cells_per_block = cells_per_block;
        self
    }

    /// Replace the settings of one axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis, config: AxisConfig) -> Self {
        self.axes[axis] = config;
        self
    }

    /// Use the same density on every axis.
    #[must_use]
    pub fn with_density(mut self, density: impl Into<DensityKind>) -> Self {
        let density = density.into();
        for axis in Axis::ALL {
            self.axes[axis].density = density;
        }
        self
    }

    /// Use the same ghost counts on every axis.
    #[must_use]
    pub fn with_ghosts(mut self, ghosts: GhostCells) -> Self {
        for axis in Axis::ALL {
            self.axes[axis].ghosts = ghosts;
        }
        self
    }

    /// Check the configuration without computing any widths.
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroCellsPerBlock`], or the first per-axis problem
    /// wrapped in [`GridError::Axis`].
    pub fn validate(&self) -> Result<()> {
        if self.cells_per_block == 0 {
            return Err(GridError::ZeroCellsPerBlock);
        }
        for axis in Axis::ALL {
            self.axes[axis]
                .validate(self.cells_per_block)
                .map_err(|err| err.on_axis(axis))?;
        }
        Ok(())
    }

    /// Build the three shared axis meshes.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate); init failures are wrapped in
    /// [`GridError::Axis`] as well.
    pub fn build_meshes(&self) -> Result<PerAxis<Arc<AxisMesh>>> {
        if self.cells_per_block == 0 {
            return Err(GridError::ZeroCellsPerBlock);
        }
        self.axes.each_ref().try_map(|axis, config| {
            config
                .build_mesh(self.cells_per_block)
                .map(Arc::new)
                .map_err(|err| err.on_axis(axis))
        })
    }

    /// Build the axis meshes and the metadata of every block.
    ///
    /// # Errors
    ///
    /// See [`build_meshes`](Self::build_meshes).
    pub fn build(&self) -> Result<BlockGrid> {
        let grid = BlockGrid::from_meshes(self.build_meshes()?);
        log_summary(&grid);
        Ok(grid)
    }

    /// Like [`build`](Self::build), with block metadata built on the rayon
    /// thread pool. The result is identical to the sequential build.
    ///
    /// # Errors
    ///
    /// See [`build_meshes`](Self::build_meshes).
    #[cfg(feature = "parallel")]
    pub fn build_parallel(&self) -> Result<BlockGrid> {
        let grid = BlockGrid::from_meshes_parallel(self.build_meshes()?);
        log_summary(&grid);
        Ok(grid)
    }
}

fn log_summary(grid: &BlockGrid) {
    let meshes = grid.meshes();
    info!(
        lattice = %grid.lattice(),
        blocks = grid.n_blocks(),
        x = meshes.x.distribution_name(),
        y = meshes.y.distribution_name(),
        z = meshes.z.distribution_name(),
        "Built block grid"
    );
}
