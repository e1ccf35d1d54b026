//! Block lattice resolution.

use std::fmt;

use super::axis::PerAxis;
use super::indices::BlockCoord;

/// Number of blocks along each axis of the block lattice.
///
/// # Example
///
/// ```
/// use blockgrid::types::BlockLattice;
///
/// let lattice = BlockLattice::new(4, 2, 1);
/// assert_eq!(lattice.total_blocks(), 8);
/// assert_eq!(lattice.coords().count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockLattice {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl BlockLattice {
    /// Create a lattice resolution.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        assert!(nx > 0, "nx must be positive, got {}", nx);
        assert!(ny > 0, "ny must be positive, got {}", ny);
        assert!(nz > 0, "nz must be positive, got {}", nz);
        Self { nx, ny, nz }
    }

    /// Same number of blocks along every axis.
    pub fn cube(n: usize) -> Self {
        Self::new(n, n, n)
    }

    /// Blocks along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Blocks along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Blocks along z.
    #[inline]
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Total number of blocks.
    #[inline]
    pub fn total_blocks(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Whether a block coordinate lies inside the lattice.
    #[inline]
    pub fn contains(&self, coord: BlockCoord) -> bool {
        coord.ix < self.nx && coord.iy < self.ny && coord.iz < self.nz
    }

    /// Linear (x-fastest) position of a block coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the lattice.
    #[inline]
    pub fn linear_index(&self, coord: BlockCoord) -> usize {
        assert!(
            self.contains(coord),
            "block {} outside lattice {}",
            coord,
            self
        );
        coord.ix + self.nx * (coord.iy + self.ny * coord.iz)
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    #[inline]
    pub fn coord(&self, linear: usize) -> BlockCoord {
        assert!(
            linear < self.total_blocks(),
            "linear block index {} outside lattice {}",
            linear,
            self
        );
        BlockCoord::new(
            linear % self.nx,
            (linear / self.nx) % self.ny,
            linear / (self.nx * self.ny),
        )
    }

    /// Iterate over all block coordinates in linear (x-fastest) order.
    pub fn coords(&self) -> impl Iterator<Item = BlockCoord> + ExactSizeIterator + '_ {
        (0..self.total_blocks()).map(move |linear| self.coord(linear))
    }

    /// Return as tuple (nx, ny, nz).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }
}

impl fmt::Display for BlockLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}×{}", self.nx, self.ny, self.nz)
    }
}

impl From<PerAxis<usize>> for BlockLattice {
    fn from(counts: PerAxis<usize>) -> Self {
        Self::new(counts.x, counts.y, counts.z)
    }
}

impl From<BlockLattice> for PerAxis<usize> {
    fn from(lattice: BlockLattice) -> Self {
        PerAxis::new(lattice.nx, lattice.ny, lattice.nz)
    }
}
