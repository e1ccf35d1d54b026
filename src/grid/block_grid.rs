//! Mesh context owning the axis meshes and the block metadata.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::axis::AxisMesh;
use crate::block::BlockMetadata;
use crate::types::{Axis, BlockCoord, BlockId, BlockLattice, Interval, PayloadHandle, PerAxis};

/// Three shared axis meshes plus the metadata of every block they span.
///
/// Blocks are stored in linear (x-fastest) lattice order and the id of each
/// block is its linear index.
#[derive(Clone, Debug)]
pub struct BlockGrid {
    meshes: PerAxis<Arc<AxisMesh>>,
    lattice: BlockLattice,
    blocks: Vec<BlockMetadata>,
}

impl BlockGrid {
    /// Build the metadata of every block spanned by `meshes`.
    pub fn from_meshes(meshes: PerAxis<Arc<AxisMesh>>) -> Self {
        let lattice = lattice_of(&meshes);
        let blocks = (0..lattice.total_blocks())
            .map(|linear| block_at(&meshes, &lattice, linear))
            .collect();
        Self {
            meshes,
            lattice,
            blocks,
        }
    }

    /// Parallel version of [`from_meshes`](Self::from_meshes).
    #[cfg(feature = "parallel")]
    pub fn from_meshes_parallel(meshes: PerAxis<Arc<AxisMesh>>) -> Self {
        let lattice = lattice_of(&meshes);
        let blocks = (0..lattice.total_blocks())
            .into_par_iter()
            .map(|linear| block_at(&meshes, &lattice, linear))
            .collect();
        Self {
            meshes,
            lattice,
            blocks,
        }
    }

    /// Block counts per axis.
    #[inline]
    pub fn lattice(&self) -> BlockLattice {
        self.lattice
    }

    /// Total number of blocks.
    #[inline]
    pub fn n_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Shared mesh of one axis.
    #[inline]
    pub fn axis_mesh(&self, axis: Axis) -> &Arc<AxisMesh> {
        &self.meshes[axis]
    }

    /// All three axis meshes.
    #[inline]
    pub fn meshes(&self) -> &PerAxis<Arc<AxisMesh>> {
        &self.meshes
    }

    /// Physical domain per axis.
    pub fn domain(&self) -> PerAxis<Interval> {
        self.meshes.each_ref().map(|mesh| mesh.domain())
    }

    /// Metadata of the block at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the lattice.
    #[inline]
    pub fn block(&self, coord: BlockCoord) -> &BlockMetadata {
        &self.blocks[self.lattice.linear_index(coord)]
    }

    /// Metadata of the block at `coord`, `None` outside the lattice.
    pub fn get(&self, coord: BlockCoord) -> Option<&BlockMetadata> {
        if self.lattice.contains(coord) {
            Some(self.block(coord))
        } else {
            None
        }
    }

    /// Metadata of the block with id `id`.
    pub fn by_id(&self, id: BlockId) -> Option<&BlockMetadata> {
        usize::try_from(id.get())
            .ok()
            .and_then(|linear| self.blocks.get(linear))
    }

    /// All blocks in linear order.
    #[inline]
    pub fn blocks(&self) -> &[BlockMetadata] {
        &self.blocks
    }

    /// Iterate over all blocks in linear order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockMetadata> {
        self.blocks.iter()
    }

    /// Block containing a physical point, `None` outside the domain.
    pub fn locate(&self, point: [f64; 3]) -> Option<&BlockMetadata> {
        let ix = self.meshes.x.locate_block(point[0])?;
        let iy = self.meshes.y.locate_block(point[1])?;
        let iz = self.meshes.z.locate_block(point[2])?;
        Some(self.block(BlockCoord::new(ix, iy, iz)))
    }

    /// Record the payload handle of the block at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the lattice.
    pub fn attach_payload(&mut self, coord: BlockCoord, payload: PayloadHandle) {
        let linear = self.lattice.linear_index(coord);
        self.blocks[linear].set_payload(payload);
    }
}

fn lattice_of(meshes: &PerAxis<Arc<AxisMesh>>) -> BlockLattice {
    meshes.each_ref().map(|mesh| mesh.n_blocks()).into()
}

fn block_at(
    meshes: &PerAxis<Arc<AxisMesh>>,
    lattice: &BlockLattice,
    linear: usize,
) -> BlockMetadata {
    let coord = lattice.coord(linear);
    BlockMetadata::from_meshes(BlockId::new(linear as i64), coord, meshes)
}
