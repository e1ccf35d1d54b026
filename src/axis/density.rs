//! Cell-density distributions for axis meshes.
//!
//! A density distribution decides how cell widths vary along one axis. The
//! interior widths it produces always add up to the domain extent; ghost
//! widths continue the same profile past both ends of the domain.
//!
//! # Available Distributions
//!
//! - [`UniformDensity`]: Equal widths everywhere
//! - [`ClusteredDensity`]: Bell-shaped refinement around the domain centre
//!
//! # Example
//!
//! ```
//! use blockgrid::axis::{ClusteredDensity, DensityDistribution, GhostCells, UniformDensity};
//! use blockgrid::types::Interval;
//!
//! let domain = Interval::new(0.0, 1.0).unwrap();
//! let mut widths = vec![0.0; 16];
//!
//! UniformDensity.compute_spacing(domain, &mut widths, GhostCells::NONE, None);
//! assert!(widths.iter().all(|&w| (w - 1.0 / 16.0).abs() < 1e-15));
//!
//! ClusteredDensity::new(2.0, 0.25).compute_spacing(domain, &mut widths, GhostCells::NONE, None);
//! assert!(widths[8] < widths[0]);
//! ```

use super::ghost::GhostCells;
use crate::error::{GridError, Result};
use crate::types::Interval;

/// Strategy that fills the cell widths of an axis.
///
/// # Implementation Notes
///
/// - `cells.len()` is the interior cell count and must be positive
/// - Interior widths must add up to `domain.extent()`
/// - `ghost_out`, when given, has `ghosts.total()` entries laid out as
///   `[start ghosts..., end ghosts...]`
pub trait DensityDistribution: Send + Sync {
    /// Whether every cell gets the same width.
    ///
    /// Axis meshes built from a uniform distribution let block metadata use
    /// the closed-form position path.
    fn is_uniform(&self) -> bool;

    /// Fill interior widths and, optionally, ghost widths.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty or `ghost_out` has the wrong length.
    fn compute_spacing(
        &self,
        domain: Interval,
        cells: &mut [f64],
        ghosts: GhostCells,
        ghost_out: Option<&mut [f64]>,
    );

    /// Check distribution parameters before computing anything.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Description of parameters (for diagnostics).
    fn description(&self) -> String {
        self.name().to_string()
    }
}

fn check_buffers(cells: &[f64], ghosts: GhostCells, ghost_out: Option<&[f64]>) {
    assert!(!cells.is_empty(), "Need at least one cell");
    if let Some(out) = ghost_out {
        assert_eq!(
            out.len(),
            ghosts.total(),
            "ghost buffer holds {} widths, {} ghosts requested",
            out.len(),
            ghosts.total()
        );
    }
}

// =============================================================================
// Uniform Density
// =============================================================================

/// Equal cell widths across the whole axis.
///
/// Ghost cells get the interior width as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformDensity;

impl DensityDistribution for UniformDensity {
    fn is_uniform(&self) -> bool {
        true
    }

    fn compute_spacing(
        &self,
        domain: Interval,
        cells: &mut [f64],
        ghosts: GhostCells,
        ghost_out: Option<&mut [f64]>,
    ) {
        check_buffers(cells, ghosts, ghost_out.as_deref());

        let h = domain.extent() / cells.len() as f64;
        cells.fill(h);

        if let Some(out) = ghost_out {
            out.fill(h);
        }
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

// =============================================================================
// Clustered (Gaussian-profile) Density
// =============================================================================

/// Bell-shaped refinement around the centre of the profile.
///
/// The relative weight at 1-based position `p` among the
/// `total = ghosts.start + n + ghosts.end` positions is
///
/// ```text
/// w(p) = 1 / (a · exp(-½ ((p - c) · y)²) + 1)
/// c    = (total + 1) / 2
/// y    = 1 / (b · (total + 1))
/// ```
///
/// All weights are scaled by `extent / Σ w(interior)`, so interior widths add
/// up to the extent exactly and ghost widths follow the same scaled profile.
///
/// # Parameters
///
/// - `a`: Depth of the refinement (> 0). The centre weight is `1 / (a + 1)`
///   of the far-field weight, so `a → 0` approaches uniform spacing.
/// - `b`: Width of the refined region as a fraction of the profile (> 0).
///
/// # Example
///
/// ```
/// use blockgrid::axis::{AxisLayout, ClusteredDensity, GhostCells};
///
/// let mesh = AxisLayout::from_bounds(0.0, 1.0, 4, 8)
///     .unwrap()
///     .init(&ClusteredDensity::default(), GhostCells::NONE)
///     .unwrap();
///
/// let total: f64 = mesh.cell_widths().iter().sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// assert!(!mesh.is_uniform());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusteredDensity {
    /// Refinement depth (> 0, default 1.0).
    pub a: f64,
    /// Refined-region width relative to the profile (> 0, default 0.25).
    pub b: f64,
}

impl Default for ClusteredDensity {
    fn default() -> Self {
        Self { a: 1.0, b: 0.25 }
    }
}

impl ClusteredDensity {
    /// Create a clustered distribution with custom parameters.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Relative weight at 1-based position `p`.
    #[inline]
    fn weight(&self, p: usize, center: f64, y: f64) -> f64 {
        let x = (p as f64 - center) * y;
        1.0 / (self.a * (-0.5 * x * x).exp() + 1.0)
    }
}

impl DensityDistribution for ClusteredDensity {
    fn is_uniform(&self) -> bool {
        false
    }

    fn compute_spacing(
        &self,
        domain: Interval,
        cells: &mut [f64],
        ghosts: GhostCells,
        ghost_out: Option<&mut [f64]>,
    ) {
        check_buffers(cells, ghosts, ghost_out.as_deref());

        let n = cells.len();
        let span = (n + ghosts.total() + 1) as f64;
        let center = 0.5 * span;
        let y = 1.0 / (self.b * span);

        // Interior cell i sits at position ghosts.start + i + 1.
        let first = ghosts.start + 1;
        let interior_sum: f64 = (0..n).map(|i| self.weight(first + i, center, y)).sum();
        let scale = domain.extent() / interior_sum;

        for (i, width) in cells.iter_mut().enumerate() {
            *width = scale * self.weight(first + i, center, y);
        }

        if let Some(out) = ghost_out {
            let (before, after) = out.split_at_mut(ghosts.start);
            for (g, width) in before.iter_mut().enumerate() {
                *width = scale * self.weight(g + 1, center, y);
            }
            let after_first = first + n;
            for (g, width) in after.iter_mut().enumerate() {
                *width = scale * self.weight(after_first + g, center, y);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.a.is_finite() && self.a > 0.0) {
            return Err(GridError::invalid_parameter(self.name(), "a", self.a));
        }
        if !(self.b.is_finite() && self.b > 0.0) {
            return Err(GridError::invalid_parameter(self.name(), "b", self.b));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "clustered"
    }

    fn description(&self) -> String {
        format!("Clustered (a={}, b={})", self.a, self.b)
    }
}

// =============================================================================
// Configuration form
// =============================================================================

/// Serialisable choice of density distribution.
///
/// # Example
///
/// ```
/// use blockgrid::axis::{DensityDistribution, DensityKind};
///
/// let density = DensityKind::Clustered { a: 2.0, b: 0.1 }.build();
/// assert_eq!(density.name(), "clustered");
/// assert!(!density.is_uniform());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DensityKind {
    /// [`UniformDensity`]
    #[default]
    Uniform,
    /// [`ClusteredDensity`] with the given parameters
    Clustered {
        /// Refinement depth
        a: f64,
        /// Refined-region width
        b: f64,
    },
}

impl DensityKind {
    /// Instantiate the distribution.
    pub fn build(self) -> Box<dyn DensityDistribution> {
        match self {
            DensityKind::Uniform => Box::new(UniformDensity),
            DensityKind::Clustered { a, b } => Box::new(ClusteredDensity::new(a, b)),
        }
    }
}

impl From<ClusteredDensity> for DensityKind {
    fn from(density: ClusteredDensity) -> Self {
        DensityKind::Clustered {
            a: density.a,
            b: density.b,
        }
    }
}

impl From<UniformDensity> for DensityKind {
    fn from(_: UniformDensity) -> Self {
        DensityKind::Uniform
    }
}

// =============================================================================
// Tests
// =============================================================================
