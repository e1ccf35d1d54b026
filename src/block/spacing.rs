//! Per-axis geometry of a block.
//!
//! [`AxisSpec`] is what callers hand in when building block metadata;
//! [`AxisGeometry`] is the resolved form the block keeps. A stretched axis
//! keeps a shared handle to the [`AxisMesh`] that owns its cell widths, so
//! the widths stay valid for as long as the block exists.

use std::sync::Arc;

use crate::axis::{AxisMesh, center_offset};

/// How one axis of a block gets its geometry.
#[derive(Clone, Debug)]
pub enum AxisSpec {
    /// Explicit uniform spacing, no axis mesh involved.
    Uniform {
        /// Physical start of the block on this axis
        origin: f64,
        /// Physical width of the block on this axis
        extent: f64,
        /// Cell width
        spacing: f64,
    },
    /// Geometry of block `block` of an axis mesh.
    Mesh {
        /// Mesh owning the axis spacing
        mesh: Arc<AxisMesh>,
        /// Block index along this axis
        block: usize,
    },
}

impl AxisSpec {
    /// Explicit uniform spacing.
    pub fn uniform(origin: f64, extent: f64, spacing: f64) -> Self {
        AxisSpec::Uniform {
            origin,
            extent,
            spacing,
        }
    }

    /// Block `block` of a shared axis mesh.
    pub fn mesh(mesh: &Arc<AxisMesh>, block: usize) -> Self {
        AxisSpec::Mesh {
            mesh: Arc::clone(mesh),
            block,
        }
    }

    /// Resolve into the geometry a block stores.
    ///
    /// # Panics
    ///
    /// Panics on a non-finite origin, a negative or non-finite extent, a
    /// non-positive or non-finite spacing, or an out-of-range mesh block.
    pub fn resolve(self) -> AxisGeometry {
        match self {
            AxisSpec::Uniform {
                origin,
                extent,
                spacing,
            } => {
                assert!(origin.is_finite(), "block origin must be finite, got {}", origin);
                assert!(
                    extent.is_finite() && extent >= 0.0,
                    "block extent must be finite and non-negative, got {}",
                    extent
                );
                assert!(
                    spacing.is_finite() && spacing > 0.0,
                    "grid spacing must be finite and positive, got {}",
                    spacing
                );
                AxisGeometry {
                    origin,
                    extent,
                    spacing: AxisSpacing::Uniform(spacing),
                }
            }
            AxisSpec::Mesh { mesh, block } => {
                let origin = mesh.block_origin(block);
                let extent = mesh.block_width(block);
                let spacing = if mesh.is_uniform() {
                    AxisSpacing::Uniform(mesh.spacing_slice(block)[0])
                } else {
                    AxisSpacing::Stretched { mesh, block }
                };
                AxisGeometry {
                    origin,
                    extent,
                    spacing,
                }
            }
        }
    }
}

/// Cell spacing of one axis of a block.
#[derive(Clone, Debug)]
pub enum AxisSpacing {
    /// Every cell has this width; positions use the closed form.
    Uniform(f64),
    /// Cell widths come from block `block` of `mesh`; positions sum them.
    Stretched {
        /// Mesh owning the widths
        mesh: Arc<AxisMesh>,
        /// Block index along this axis
        block: usize,
    },
}

impl AxisSpacing {
    /// Whether the closed-form path applies.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        matches!(self, AxisSpacing::Uniform(_))
    }

    /// The uniform cell width, `None` on a stretched axis.
    #[inline]
    pub fn uniform_spacing(&self) -> Option<f64> {
        match self {
            AxisSpacing::Uniform(h) => Some(*h),
            AxisSpacing::Stretched { .. } => None,
        }
    }

    /// Cell widths of the block, `None` on a uniform axis.
    #[inline]
    pub fn widths(&self) -> Option<&[f64]> {
        match self {
            AxisSpacing::Uniform(_) => None,
            AxisSpacing::Stretched { mesh, block } => Some(mesh.spacing_slice(*block)),
        }
    }

    /// Offset of the centre of local cell `index` from the block origin.
    ///
    /// # Panics
    ///
    /// Panics on a stretched axis if `index` is outside the block.
    #[inline]
    pub fn center_offset(&self, index: usize) -> f64 {
        match self {
            AxisSpacing::Uniform(h) => h * (index as f64 + 0.5),
            AxisSpacing::Stretched { mesh, block } => {
                let widths = mesh.spacing_slice(*block);
                assert!(
                    index < widths.len(),
                    "local cell index {} outside block of {} cells",
                    index,
                    widths.len()
                );
                center_offset(widths, index)
            }
        }
    }
}

/// Resolved origin, extent and spacing of a block along one axis.
#[derive(Clone, Debug)]
pub struct AxisGeometry {
    origin: f64,
    extent: f64,
    spacing: AxisSpacing,
}

impl AxisGeometry {
    /// Geometry of a placeholder block.
    pub(crate) fn empty() -> Self {
        Self {
            origin: 0.0,
            extent: 0.0,
            spacing: AxisSpacing::Uniform(0.0),
        }
    }

    /// Physical start of the block.
    #[inline]
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Physical width of the block.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Cell spacing.
    #[inline]
    pub fn spacing(&self) -> &AxisSpacing {
        &self.spacing
    }

    /// Physical coordinate of the centre of local cell `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f64 {
        self.origin + self.spacing.center_offset(index)
    }
}
