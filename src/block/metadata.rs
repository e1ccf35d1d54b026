//! Block metadata record.

use std::sync::Arc;

use super::spacing::{AxisGeometry, AxisSpec, AxisSpacing};
use crate::axis::AxisMesh;
use crate::types::{Axis, BlockCoord, BlockId, PayloadHandle, PerAxis};

/// Scalar spacing carried by blocks built with one spacing for all axes.
///
/// Only [`BlockMetadata::uniform`] produces it; mesh-derived blocks have no
/// meaningful single spacing and report `None` instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegacySpacing {
    /// Block width (same on every axis)
    pub h: f64,
    /// Cell width (same on every axis)
    pub h_gridpoint: f64,
}

/// Identity, placement and spacing of one block of the lattice.
///
/// Axis spacing is either uniform, answered in closed form, or stretched,
/// answered by summing the block's cell widths in the owning [`AxisMesh`].
/// Stretched axes keep an `Arc` to that mesh, so metadata can be stored and
/// sent between threads freely.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use blockgrid::axis::AxisMesh;
/// use blockgrid::block::BlockMetadata;
/// use blockgrid::types::{BlockCoord, BlockId, PerAxis};
///
/// let axis = Arc::new(AxisMesh::uniform(0.0, 1.0, 4, 2).unwrap());
/// let meshes = PerAxis::splat(axis);
///
/// let block = BlockMetadata::from_meshes(BlockId::new(0), BlockCoord::new(0, 1, 2), &meshes);
/// assert_eq!(block.origin(), [0.0, 0.25, 0.5]);
///
/// let p = block.position(0, 0, 1);
/// assert!((p[0] - 0.0625).abs() < 1e-15);
/// assert!((p[2] - 0.6875).abs() < 1e-15);
/// ```
#[derive(Clone, Debug)]
pub struct BlockMetadata {
    id: BlockId,
    coord: BlockCoord,
    payload: Option<PayloadHandle>,
    special: bool,
    placeholder: bool,
    axes: PerAxis<AxisGeometry>,
    legacy: Option<LegacySpacing>,
}

impl BlockMetadata {
    /// Build metadata from one [`AxisSpec`] per axis.
    ///
    /// # Panics
    ///
    /// Panics if a spec is invalid (see [`AxisSpec::resolve`]).
    pub fn new(id: BlockId, coord: BlockCoord, specs: impl Into<PerAxis<AxisSpec>>) -> Self {
        let specs: PerAxis<AxisSpec> = specs.into();
        Self {
            id,
            coord,
            payload: None,
            special: false,
            placeholder: false,
            axes: specs.map(AxisSpec::resolve),
            legacy: None,
        }
    }

    /// Block with the same uniform spacing on every axis.
    ///
    /// `block_extent` is the block width and `h_gridpoint` the cell width on
    /// every axis. Both are also reported through [`legacy_spacing`](Self::legacy_spacing).
    pub fn uniform(
        id: BlockId,
        coord: BlockCoord,
        origin: [f64; 3],
        block_extent: f64,
        h_gridpoint: f64,
    ) -> Self {
        let specs = origin.map(|o| AxisSpec::uniform(o, block_extent, h_gridpoint));
        Self {
            legacy: Some(LegacySpacing {
                h: block_extent,
                h_gridpoint,
            }),
            ..Self::new(id, coord, specs)
        }
    }

    /// Block `coord` of the lattice spanned by three axis meshes.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside any of the meshes.
    pub fn from_meshes(id: BlockId, coord: BlockCoord, meshes: &PerAxis<Arc<AxisMesh>>) -> Self {
        let specs = meshes
            .each_ref()
            .map_with_axis(|axis, mesh| AxisSpec::mesh(mesh, coord.get(axis)));
        Self::new(id, coord, specs)
    }

    /// Empty record usable as a container filler.
    ///
    /// Has id [`BlockId::NONE`], no payload and zero extent. Position
    /// queries on it panic.
    pub fn placeholder() -> Self {
        Self {
            id: BlockId::NONE,
            coord: BlockCoord::default(),
            payload: None,
            special: false,
            placeholder: true,
            axes: PerAxis::new(
                AxisGeometry::empty(),
                AxisGeometry::empty(),
                AxisGeometry::empty(),
            ),
            legacy: None,
        }
    }

    /// Attach the payload handle assigned by the block container.
    #[must_use]
    pub fn with_payload(mut self, payload: PayloadHandle) -> Self {
        self.payload = Some(payload);
        self
    }

    pub(crate) fn set_payload(&mut self, payload: PayloadHandle) {
        self.payload = Some(payload);
    }

    /// Set the special marker.
    #[must_use]
    pub fn with_special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Process-local block id.
    #[inline]
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Lattice coordinate.
    #[inline]
    pub fn coord(&self) -> BlockCoord {
        self.coord
    }

    /// Payload handle, if the container attached one.
    #[inline]
    pub fn payload(&self) -> Option<PayloadHandle> {
        self.payload
    }

    /// Special marker.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Whether this is a [`placeholder`](Self::placeholder) record.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Resolved geometry along one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisGeometry {
        &self.axes[axis]
    }

    /// Physical origin `[x, y, z]`.
    #[inline]
    pub fn origin(&self) -> [f64; 3] {
        self.axes.each_ref().map(AxisGeometry::origin).to_array()
    }

    /// Physical block widths `[x, y, z]`.
    #[inline]
    pub fn block_extent(&self) -> [f64; 3] {
        self.axes.each_ref().map(AxisGeometry::extent).to_array()
    }

    /// Upper corner (origin + extent).
    pub fn upper(&self) -> [f64; 3] {
        self.axes
            .each_ref()
            .map(|geom| geom.origin() + geom.extent())
            .to_array()
    }

    /// Whether the closed-form position path applies on `axis`.
    #[inline]
    pub fn is_uniform(&self, axis: Axis) -> bool {
        self.axes[axis].spacing().is_uniform()
    }

    /// Uniform cell width on `axis`, `None` on a stretched axis.
    #[inline]
    pub fn grid_spacing(&self, axis: Axis) -> Option<f64> {
        self.axes[axis].spacing().uniform_spacing()
    }

    /// Cell widths of this block on `axis`, `None` on a uniform axis.
    #[inline]
    pub fn spacing(&self, axis: Axis) -> Option<&[f64]> {
        self.axes[axis].spacing().widths()
    }

    /// Per-axis spacing.
    #[inline]
    pub fn axis_spacing(&self, axis: Axis) -> &AxisSpacing {
        self.axes[axis].spacing()
    }

    /// Single block/cell width, only for blocks built with [`uniform`](Self::uniform).
    #[inline]
    pub fn legacy_spacing(&self) -> Option<LegacySpacing> {
        self.legacy
    }

    /// Whether a physical point lies inside the block (upper faces excluded).
    pub fn contains(&self, point: [f64; 3]) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let geom = &self.axes[axis];
            let x = point[axis.index()];
            x >= geom.origin() && x < geom.origin() + geom.extent()
        })
    }

    // =========================================================================
    // Position queries
    // =========================================================================

    /// Physical coordinates of the centre of local cell `(ix, iy)`.
    ///
    /// # Panics
    ///
    /// Panics on a placeholder or if an index is outside the block on a
    /// stretched axis.
    #[inline]
    pub fn position_2d(&self, ix: usize, iy: usize) -> [f64; 2] {
        self.check_not_placeholder();
        [self.axes.x.center(ix), self.axes.y.center(iy)]
    }

    /// Physical coordinates of the centre of local cell `(ix, iy, iz)`.
    ///
    /// Uniform axes evaluate `origin + h · (i + ½)`; stretched axes sum the
    /// block's cell widths up to `i` and add half of width `i`.
    ///
    /// # Panics
    ///
    /// Panics on a placeholder or if an index is outside the block on a
    /// stretched axis.
    #[inline]
    pub fn position(&self, ix: usize, iy: usize, iz: usize) -> [f64; 3] {
        self.check_not_placeholder();
        [
            self.axes.x.center(ix),
            self.axes.y.center(iy),
            self.axes.z.center(iz),
        ]
    }

    #[inline]
    fn check_not_placeholder(&self) {
        assert!(
            !self.is_placeholder(),
            "position query on a placeholder block"
        );
    }
}

impl Default for BlockMetadata {
    fn default() -> Self {
        Self::placeholder()
    }
}
