//! Strongly-typed block identities and handles.
//!
//! These types keep block ids, lattice coordinates and payload handles
//! from being mixed up with plain counters.

use std::fmt;

use super::axis::{Axis, PerAxis};

/// Process-local block identity.
///
/// Unique within one process only; ids from different processes may collide.
/// [`BlockId::NONE`] (`-1`) is the id of placeholder records; any other value,
/// negative or not, is an ordinary id.
///
/// # Example
///
/// ```
/// use blockgrid::types::BlockId;
///
/// let id = BlockId::new(42);
/// assert!(id.is_valid());
/// assert!(!BlockId::NONE.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BlockId(i64);

impl BlockId {
    /// Id of a placeholder record.
    pub const NONE: Self = Self(-1);

    /// Create a new block id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this id differs from [`NONE`](Self::NONE).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::NONE.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.0)
    }
}

impl From<i64> for BlockId {
    #[inline]
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Opaque reference to the field-data payload of a block.
///
/// The block container assigns handles and resolves them; block metadata
/// only carries the value around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PayloadHandle(usize);

impl PayloadHandle {
    /// Create a handle from a container slot.
    #[inline]
    pub const fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Get the raw slot value.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PayloadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// 3D integer index of a block within the block lattice.
///
/// # Example
///
/// ```
/// use blockgrid::types::{Axis, BlockCoord};
///
/// let coord = BlockCoord::new(3, 1, 0);
/// assert_eq!(coord.get(Axis::X), 3);
/// assert_eq!(coord.to_array(), [3, 1, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockCoord {
    /// Block index along x
    pub ix: usize,
    /// Block index along y
    pub iy: usize,
    /// Block index along z
    pub iz: usize,
}

impl BlockCoord {
    /// Create a new lattice coordinate.
    #[inline]
    pub const fn new(ix: usize, iy: usize, iz: usize) -> Self {
        Self { ix, iy, iz }
    }

    /// Index along one axis.
    #[inline]
    pub const fn get(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.ix,
            Axis::Y => self.iy,
            Axis::Z => self.iz,
        }
    }

    /// Convert to array `[ix, iy, iz]`.
    #[inline]
    pub const fn to_array(self) -> [usize; 3] {
        [self.ix, self.iy, self.iz]
    }
}

impl fmt::Display for BlockCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.ix, self.iy, self.iz)
    }
}

impl From<[usize; 3]> for BlockCoord {
    fn from([ix, iy, iz]: [usize; 3]) -> Self {
        Self { ix, iy, iz }
    }
}

impl From<BlockCoord> for PerAxis<usize> {
    fn from(coord: BlockCoord) -> Self {
        PerAxis::new(coord.ix, coord.iy, coord.iz)
    }
}
