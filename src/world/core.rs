use glam::IVec3;
use thiserror::Error;

use crate::config::WorldConfig;
use crate::world::chunk::{Chunk, ChunkError};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::voxel::Voxel;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("Chunk error: {0}")]
    Chunk(#[from] ChunkError),
    #[error("Position out of world bounds")]
    OutOfBounds,
}

/// A fixed grid of chunks, allocated eagerly at construction and never
/// resized. Global coordinates are non-negative; anything else is out of
/// bounds, including the negative half-spaces.
#[derive(Debug, Clone)]
pub struct World {
    chunks: Vec<Chunk>,
    grid: IVec3,
    chunk_size: IVec3,
}

impl World {
    pub fn new(grid: IVec3, chunk_size: IVec3) -> Self {
        debug_assert!(grid.min_element() > 0 && chunk_size.min_element() > 0);
        let count = (grid.x * grid.y * grid.z) as usize;
        let chunks = (0..count).map(|_| Chunk::new(chunk_size)).collect();
        Self {
            chunks,
            grid,
            chunk_size,
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.grid_extent(), config.chunk_extent())
    }

    pub fn grid(&self) -> IVec3 {
        self.grid
    }

    pub fn chunk_size(&self) -> IVec3 {
        self.chunk_size
    }

    /// Total voxel extent per axis.
    pub fn bounds(&self) -> IVec3 {
        self.grid * self.chunk_size
    }

    pub fn contains(&self, global: IVec3) -> bool {
        let bounds = self.bounds();
        global.x >= 0
            && global.x < bounds.x
            && global.y >= 0
            && global.y < bounds.y
            && global.z >= 0
            && global.z < bounds.z
    }

    /// Splits a global voxel coordinate into the owning chunk and the
    /// coordinate within it. Invariant: `global = chunk * chunk_size + local`
    /// on every axis.
    pub fn world_to_chunk(&self, global: IVec3) -> Result<(ChunkCoord, IVec3), WorldError> {
        if !self.contains(global) {
            return Err(WorldError::OutOfBounds);
        }
        let chunk = ChunkCoord::new(
            global.x / self.chunk_size.x,
            global.y / self.chunk_size.y,
            global.z / self.chunk_size.z,
        );
        let local = IVec3::new(
            global.x % self.chunk_size.x,
            global.y % self.chunk_size.y,
            global.z % self.chunk_size.z,
        );
        Ok((chunk, local))
    }

    pub fn voxel_at(&self, global: IVec3) -> Result<Voxel, WorldError> {
        let (chunk, local) = self.world_to_chunk(global)?;
        let voxel = self.chunks[self.chunk_index(chunk)].voxel(local.x, local.y, local.z)?;
        Ok(voxel)
    }

    pub fn set_voxel(&mut self, global: IVec3, voxel: Voxel) -> Result<(), WorldError> {
        let (chunk, local) = self.world_to_chunk(global)?;
        let index = self.chunk_index(chunk);
        self.chunks[index].set_voxel(local.x, local.y, local.z, voxel)?;
        Ok(())
    }

    /// Seeds one horizontal plane of the world, e.g. a ground layer.
    pub fn fill_layer(&mut self, y: i32, voxel: Voxel) -> Result<(), WorldError> {
        let bounds = self.bounds();
        for x in 0..bounds.x {
            for z in 0..bounds.z {
                self.set_voxel(IVec3::new(x, y, z), voxel)?;
            }
        }
        Ok(())
    }

    // Chunks are stored row-major in chunk-grid coordinates, mirroring the
    // voxel layout inside each chunk.
    fn chunk_index(&self, coord: ChunkCoord) -> usize {
        (coord.x() + coord.y() * self.grid.x + coord.z() * self.grid.x * self.grid.y) as usize
    }
}
