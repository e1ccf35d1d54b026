//! Per-axis spacing tables.
//!
//! An [`AxisLayout`] describes one axis of the block lattice: the domain
//! interval, the number of blocks and the number of cells per block. Applying
//! a [`DensityDistribution`] to it with [`AxisLayout::init`] produces an
//! [`AxisMesh`], which owns the cell widths, the block widths and the block
//! origins for the whole axis and never changes afterwards.
//!
//! # Memory Layout
//!
//! - `cell_widths`: `n_blocks * cells_per_block` entries, block-major, so
//!   the cells of block `k` are the contiguous range `k*cpb..(k+1)*cpb`
//! - `block_widths`: one entry per block
//! - `block_origins`: `n_blocks + 1` prefix sums starting at the domain start

use std::ops::Range;

use tracing::{debug, warn};

use super::density::{DensityDistribution, UniformDensity};
use super::ghost::{GhostCells, GhostWidths};
use crate::error::{GridError, Result};
use crate::types::Interval;

/// Relative tolerance on `sum(cell_widths) == extent`.
pub const MASS_TOLERANCE: f64 = 1e-10;

/// Neighbouring-width ratio above which initialisation logs a warning.
pub const STRETCH_WARN_RATIO: f64 = 1.3;

/// Offset of a cell centre from the start of its block.
///
/// Shared by [`AxisMesh::cell_center`] and the block position query so both
/// produce bit-identical coordinates.
#[inline]
pub(crate) fn center_offset(widths: &[f64], local: usize) -> f64 {
    widths[..local].iter().sum::<f64>() + 0.5 * widths[local]
}

/// Domain bounds and block counts of one axis, before any spacing exists.
///
/// # Example
///
/// ```
/// use blockgrid::axis::{AxisLayout, GhostCells, UniformDensity};
///
/// let layout = AxisLayout::from_bounds(0.0, 1.0, 4, 2).unwrap();
/// assert_eq!(layout.n_cells(), 8);
///
/// let mesh = layout.init(&UniformDensity, GhostCells::NONE).unwrap();
/// assert_eq!(mesh.block_origin(2), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    domain: Interval,
    n_blocks: usize,
    cells_per_block: usize,
}

impl AxisLayout {
    /// Create a layout over a validated interval.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroBlocks`] or [`GridError::ZeroCellsPerBlock`]
    /// for empty axes and [`GridError::CellCountOverflow`] when the interior
    /// cell count does not fit in `usize`.
    pub fn new(domain: Interval, n_blocks: usize, cells_per_block: usize) -> Result<Self> {
        if n_blocks == 0 {
            return Err(GridError::ZeroBlocks);
        }
        if cells_per_block == 0 {
            return Err(GridError::ZeroCellsPerBlock);
        }
        if n_blocks.checked_mul(cells_per_block).is_none() {
            return Err(GridError::CellCountOverflow {
                n_blocks,
                cells_per_block,
            });
        }
        Ok(Self {
            domain,
            n_blocks,
            cells_per_block,
        })
    }

    /// Create a layout from raw bounds.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite or non-positive extent and on empty axes.
    pub fn from_bounds(
        start: f64,
        end: f64,
        n_blocks: usize,
        cells_per_block: usize,
    ) -> Result<Self> {
        Self::new(Interval::new(start, end)?, n_blocks, cells_per_block)
    }

    /// Domain interval.
    #[inline]
    pub fn domain(&self) -> Interval {
        self.domain
    }

    /// Number of blocks.
    #[inline]
    pub fn n_blocks(&self) -> usize {
        self.n_blocks
    }

    /// Cells in every block.
    #[inline]
    pub fn cells_per_block(&self) -> usize {
        self.cells_per_block
    }

    /// Interior cells on the whole axis.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_blocks * self.cells_per_block
    }

    /// Apply a density distribution and build the spacing tables.
    ///
    /// Consumes the layout, so a mesh is initialised exactly once and cannot
    /// be queried before it has spacing.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDensityParameter`] if the distribution rejects
    ///   its parameters
    /// - [`GridError::DegenerateWidth`] / [`GridError::DegenerateGhostWidth`]
    ///   if any computed width is not finite and positive
    /// - [`GridError::MassConservation`] if interior widths do not add up to
    ///   the extent within [`MASS_TOLERANCE`]
    pub fn init<D>(self, distribution: &D, ghosts: GhostCells) -> Result<AxisMesh>
    where
        D: DensityDistribution + ?Sized,
    {
        distribution.validate()?;

        let n_cells = self.n_cells();
        let mut cell_widths = vec![0.0; n_cells];
        let mut ghost_buffer = vec![0.0; ghosts.total()];
        distribution.compute_spacing(
            self.domain,
            &mut cell_widths,
            ghosts,
            Some(ghost_buffer.as_mut_slice()),
        );

        if let Some((cell, &width)) = cell_widths
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(GridError::DegenerateWidth {
                distribution: distribution.description(),
                cell,
                width,
            });
        }
        if let Some((ghost, &width)) = ghost_buffer
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(GridError::DegenerateGhostWidth {
                distribution: distribution.description(),
                ghost,
                width,
            });
        }

        let extent = self.domain.extent();
        let total: f64 = cell_widths.iter().sum();
        if (total - extent).abs() > MASS_TOLERANCE * extent {
            return Err(GridError::MassConservation {
                distribution: distribution.description(),
                expected: extent,
                actual: total,
            });
        }

        let block_widths: Vec<f64> = cell_widths
            .chunks_exact(self.cells_per_block)
            .map(|cells| cells.iter().sum())
            .collect();

        let mut block_origins = Vec::with_capacity(self.n_blocks + 1);
        let mut offset = self.domain.start;
        block_origins.push(offset);
        for width in &block_widths {
            offset += width;
            block_origins.push(offset);
        }

        let mesh = AxisMesh {
            domain: self.domain,
            n_blocks: self.n_blocks,
            cells_per_block: self.cells_per_block,
            uniform: distribution.is_uniform(),
            cell_widths,
            block_widths,
            block_origins,
            ghost_widths: GhostWidths::from_buffer(ghost_buffer, ghosts),
            distribution_name: distribution.name(),
            distribution_description: distribution.description(),
        };

        let stretch = mesh.stretch_ratio();
        debug!(
            distribution = mesh.distribution_name,
            n_blocks = mesh.n_blocks,
            n_cells = n_cells,
            ghosts = ghosts.total(),
            h_min = mesh.min_cell_width(),
            h_max = mesh.max_cell_width(),
            "Initialized axis mesh"
        );
        if stretch > STRETCH_WARN_RATIO {
            warn!(
                distribution = %mesh.distribution_description,
                stretch_ratio = stretch,
                limit = STRETCH_WARN_RATIO,
                "Neighbouring cell widths change abruptly"
            );
        }

        Ok(mesh)
    }
}

/// Cell and block spacing of one axis of the block lattice.
///
/// Built by [`AxisLayout::init`]; immutable afterwards and safe to share
/// across threads (typically behind an `Arc`).
///
/// # Example
///
/// ```
/// use blockgrid::axis::AxisMesh;
///
/// let mesh = AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap();
///
/// assert_eq!(mesh.cell_width(5), 0.125);
/// assert_eq!(mesh.block_width(1), 0.25);
/// assert_eq!(mesh.block_origin(3), 0.75);
/// assert_eq!(mesh.spacing_slice(2), &[0.125, 0.125]);
/// ```
#[derive(Clone, Debug)]
pub struct AxisMesh {
    domain: Interval,
    n_blocks: usize,
    cells_per_block: usize,
    uniform: bool,
    cell_widths: Vec<f64>,
    block_widths: Vec<f64>,
    /// `n_blocks + 1` entries; `block_origins[0]` is the domain start.
    block_origins: Vec<f64>,
    ghost_widths: GhostWidths,
    distribution_name: &'static str,
    distribution_description: String,
}

impl AxisMesh {
    /// Uniform axis without ghosts (convenience constructor).
    ///
    /// # Errors
    ///
    /// Same as [`AxisLayout::from_bounds`].
    pub fn uniform(start: f64, end: f64, n_blocks: usize, cells_per_block: usize) -> Result<Self> {
        AxisLayout::from_bounds(start, end, n_blocks, cells_per_block)?
            .init(&UniformDensity, GhostCells::NONE)
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    /// Domain interval.
    #[inline]
    pub fn domain(&self) -> Interval {
        self.domain
    }

    /// Domain start.
    #[inline]
    pub fn start(&self) -> f64 {
        self.domain.start
    }

    /// Domain end.
    #[inline]
    pub fn end(&self) -> f64 {
        self.domain.end
    }

    /// Domain length (end - start).
    #[inline]
    pub fn extent(&self) -> f64 {
        self.domain.extent()
    }

    /// Number of blocks.
    #[inline]
    pub fn n_blocks(&self) -> usize {
        self.n_blocks
    }

    /// Interior cells on the whole axis.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.cell_widths.len()
    }

    /// Cells in every block.
    #[inline]
    pub fn cells_per_block(&self) -> usize {
        self.cells_per_block
    }

    /// Whether the mesh came from a uniform distribution.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// Name of the distribution that produced the spacing.
    #[inline]
    pub fn distribution_name(&self) -> &'static str {
        self.distribution_name
    }

    /// Parameter description of the distribution.
    #[inline]
    pub fn distribution_description(&self) -> &str {
        &self.distribution_description
    }

    // =========================================================================
    // Width and origin lookups
    // =========================================================================

    /// Width of interior cell `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_cells()`.
    #[inline]
    pub fn cell_width(&self, i: usize) -> f64 {
        assert!(
            i < self.n_cells(),
            "cell index {} out of range (n_cells = {})",
            i,
            self.n_cells()
        );
        self.cell_widths[i]
    }

    /// Width of block `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= n_blocks()`.
    #[inline]
    pub fn block_width(&self, k: usize) -> f64 {
        self.check_block(k);
        self.block_widths[k]
    }

    /// Physical coordinate of the start of block `k`.
    ///
    /// Equals the domain start plus the widths of blocks `0..k`, summed in
    /// order. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `k >= n_blocks()`.
    #[inline]
    pub fn block_origin(&self, k: usize) -> f64 {
        self.check_block(k);
        self.block_origins[k]
    }

    /// Cell widths of block `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= n_blocks()`.
    #[inline]
    pub fn spacing_slice(&self, k: usize) -> &[f64] {
        &self.cell_widths[self.block_range(k)]
    }

    /// Range of global cell indices belonging to block `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= n_blocks()`.
    #[inline]
    pub fn block_range(&self, k: usize) -> Range<usize> {
        self.check_block(k);
        k * self.cells_per_block..(k + 1) * self.cells_per_block
    }

    /// Block holding interior cell `i`.
    #[inline]
    pub fn block_of_cell(&self, i: usize) -> usize {
        assert!(
            i < self.n_cells(),
            "cell index {} out of range (n_cells = {})",
            i,
            self.n_cells()
        );
        i / self.cells_per_block
    }

    /// Coordinate of the left face of cell `i`.
    ///
    /// `i == n_cells()` gives the right face of the last cell.
    pub fn cell_face(&self, i: usize) -> f64 {
        if i == self.n_cells() {
            return self.block_origins[self.n_blocks];
        }
        let k = self.block_of_cell(i);
        let local = i - k * self.cells_per_block;
        self.block_origins[k] + self.spacing_slice(k)[..local].iter().sum::<f64>()
    }

    /// Coordinate of the centre of cell `i`.
    pub fn cell_center(&self, i: usize) -> f64 {
        let k = self.block_of_cell(i);
        let local = i - k * self.cells_per_block;
        self.block_origins[k] + center_offset(self.spacing_slice(k), local)
    }

    /// Block containing physical coordinate `x`, or `None` outside the axis.
    pub fn locate_block(&self, x: f64) -> Option<usize> {
        let first = self.block_origins[0];
        let last = self.block_origins[self.n_blocks];
        if !(x >= first && x < last) {
            return None;
        }
        let above = self.block_origins[..self.n_blocks].partition_point(|&origin| origin <= x);
        Some(above - 1)
    }

    // =========================================================================
    // Whole tables
    // =========================================================================

    /// All interior cell widths.
    #[inline]
    pub fn cell_widths(&self) -> &[f64] {
        &self.cell_widths
    }

    /// All block widths.
    #[inline]
    pub fn block_widths(&self) -> &[f64] {
        &self.block_widths
    }

    /// Block origins followed by the accumulated end of the last block.
    #[inline]
    pub fn block_origins(&self) -> &[f64] {
        &self.block_origins
    }

    /// Ghost widths requested at initialisation (empty if none).
    #[inline]
    pub fn ghost_widths(&self) -> &GhostWidths {
        &self.ghost_widths
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Smallest interior cell width.
    pub fn min_cell_width(&self) -> f64 {
        self.cell_widths.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest interior cell width.
    pub fn max_cell_width(&self) -> f64 {
        self.cell_widths
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest ratio between neighbouring cell widths (1.0 for one cell).
    pub fn stretch_ratio(&self) -> f64 {
        self.cell_widths
            .windows(2)
            .map(|pair| (pair[1] / pair[0]).max(pair[0] / pair[1]))
            .fold(1.0, f64::max)
    }

    #[inline]
    fn check_block(&self, k: usize) {
        assert!(
            k < self.n_blocks,
            "block index {} out of range (n_blocks = {})",
            k,
            self.n_blocks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::ClusteredDensity;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_uniform_scenario() {
        let mesh = AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap();

        assert_eq!(mesh.n_cells(), 8);
        assert!(mesh.is_uniform());
        for i in 0..8 {
            assert!((mesh.cell_width(i) - 0.125).abs() < TOL);
        }
        for k in 0..4 {
            assert!((mesh.block_width(k) - 0.25).abs() < TOL);
            assert!((mesh.block_origin(k) - 0.25 * k as f64).abs() < TOL);
        }
    }

    #[test]
    fn test_block_widths_match_cells() {
        let mesh = AxisLayout::from_bounds(-2.0, 3.0, 5, 7)
            .unwrap()
            .init(&ClusteredDensity::new(2.0, 0.2), GhostCells::NONE)
            .unwrap();

        for k in 0..mesh.n_blocks() {
            let summed: f64 = mesh.spacing_slice(k).iter().sum();
            assert_eq!(summed, mesh.block_width(k));
            assert_eq!(mesh.spacing_slice(k).len(), 7);
        }
        let total: f64 = mesh.block_widths().iter().sum();
        assert!((total - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_origins_accumulate_block_widths() {
        let mesh = AxisLayout::from_bounds(1.0, 2.0, 6, 4)
            .unwrap()
            .init(&ClusteredDensity::default(), GhostCells::NONE)
            .unwrap();

        assert_eq!(mesh.block_origin(0), 1.0);
        for k in 0..mesh.n_blocks() - 1 {
            assert_eq!(
                mesh.block_origin(k + 1),
                mesh.block_origin(k) + mesh.block_width(k)
            );
        }
        assert_eq!(mesh.block_origins().len(), 7);
    }

    #[test]
    fn test_ghost_widths_stored() {
        let mesh = AxisLayout::from_bounds(0.0, 10.0, 5, 2)
            .unwrap()
            .init(&UniformDensity, GhostCells::new(3, 2))
            .unwrap();

        assert_eq!(mesh.ghost_widths().start(), &[1.0, 1.0, 1.0]);
        assert_eq!(mesh.ghost_widths().end(), &[1.0, 1.0]);
        assert!(mesh.cell_widths().iter().all(|&w| (w - 1.0).abs() < TOL));
    }

    #[test]
    fn test_cell_faces_and_centers() {
        let mesh = AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap();

        assert_eq!(mesh.cell_face(0), 0.0);
        assert!((mesh.cell_face(3) - 0.375).abs() < TOL);
        assert!((mesh.cell_face(8) - 1.0).abs() < TOL);
        assert!((mesh.cell_center(0) - 0.0625).abs() < TOL);
        assert!((mesh.cell_center(5) - 0.6875).abs() < TOL);
    }

    #[test]
    fn test_locate_block() {
        let mesh = AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap();

        assert_eq!(mesh.locate_block(0.0), Some(0));
        assert_eq!(mesh.locate_block(0.25), Some(1));
        assert_eq!(mesh.locate_block(0.99), Some(3));
        assert_eq!(mesh.locate_block(1.0), None);
        assert_eq!(mesh.locate_block(-0.01), None);
        assert_eq!(mesh.locate_block(f64::NAN), None);
    }

    #[test]
    fn test_stretch_ratio() {
        let uniform = AxisMesh::uniform(0.0, 1.0, 2, 8).unwrap();
        assert!((uniform.stretch_ratio() - 1.0).abs() < 1e-12);

        let clustered = AxisLayout::from_bounds(0.0, 1.0, 2, 8)
            .unwrap()
            .init(&ClusteredDensity::new(5.0, 0.25), GhostCells::NONE)
            .unwrap();
        assert!(clustered.stretch_ratio() > 1.0);
        assert!(clustered.max_cell_width() > clustered.min_cell_width());
    }

    #[test]
    fn test_layout_rejects_empty_axes() {
        assert_eq!(
            AxisLayout::from_bounds(0.0, 1.0, 0, 4),
            Err(GridError::ZeroBlocks)
        );
        assert_eq!(
            AxisLayout::from_bounds(0.0, 1.0, 4, 0),
            Err(GridError::ZeroCellsPerBlock)
        );
        assert!(matches!(
            AxisLayout::from_bounds(1.0, 1.0, 4, 4),
            Err(GridError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn test_layout_rejects_overflowing_cell_count() {
        let n_blocks = usize::MAX / 2 + 1;
        assert_eq!(
            AxisLayout::from_bounds(0.0, 1.0, n_blocks, 2),
            Err(GridError::CellCountOverflow {
                n_blocks,
                cells_per_block: 2,
            })
        );

        let layout = AxisLayout::from_bounds(0.0, 1.0, usize::MAX / 2, 2).unwrap();
        assert_eq!(layout.n_cells(), usize::MAX - 1);
    }

    #[test]
    fn test_init_rejects_bad_distribution() {
        let layout = AxisLayout::from_bounds(0.0, 1.0, 2, 2).unwrap();
        let result = layout.init(&ClusteredDensity::new(-1.0, 0.25), GhostCells::NONE);
        assert!(matches!(
            result,
            Err(GridError::InvalidDensityParameter { name: "a", .. })
        ));
    }

    /// Distribution that forgets to conserve the extent.
    struct Leaky;

    impl DensityDistribution for Leaky {
        fn is_uniform(&self) -> bool {
            true
        }

        fn compute_spacing(
            &self,
            domain: Interval,
            cells: &mut [f64],
            _ghosts: GhostCells,
            _ghost_out: Option<&mut [f64]>,
        ) {
            cells.fill(0.5 * domain.extent() / cells.len() as f64);
        }

        fn name(&self) -> &'static str {
            "leaky"
        }
    }

    /// Distribution that produces a zero-width cell.
    struct Collapsing;

    impl DensityDistribution for Collapsing {
        fn is_uniform(&self) -> bool {
            false
        }

        fn compute_spacing(
            &self,
            domain: Interval,
            cells: &mut [f64],
            _ghosts: GhostCells,
            _ghost_out: Option<&mut [f64]>,
        ) {
            let n = cells.len();
            cells.fill(domain.extent() / (n - 1) as f64);
            cells[n / 2] = 0.0;
        }

        fn name(&self) -> &'static str {
            "collapsing"
        }
    }

    #[test]
    fn test_init_detects_mass_loss() {
        let layout = AxisLayout::from_bounds(0.0, 1.0, 2, 2).unwrap();
        let result = layout.init(&Leaky, GhostCells::NONE);
        assert!(matches!(
            result,
            Err(GridError::MassConservation { actual, .. }) if (actual - 0.5).abs() < TOL
        ));
    }

    #[test]
    fn test_init_detects_degenerate_width() {
        let layout = AxisLayout::from_bounds(0.0, 1.0, 2, 2).unwrap();
        let result = layout.init(&Collapsing, GhostCells::NONE);
        assert!(matches!(
            result,
            Err(GridError::DegenerateWidth { cell: 2, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "cell index 8 out of range")]
    fn test_cell_width_out_of_range() {
        AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap().cell_width(8);
    }

    #[test]
    #[should_panic(expected = "block index 4 out of range")]
    fn test_block_origin_out_of_range() {
        AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap().block_origin(4);
    }

    #[test]
    #[should_panic(expected = "block index 4 out of range")]
    fn test_spacing_slice_out_of_range() {
        let mesh = AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap();
        let _ = mesh.spacing_slice(4);
    }
}
