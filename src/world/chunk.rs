use glam::IVec3;
use thiserror::Error;

use crate::world::voxel::Voxel;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Voxel position out of bounds")]
    OutOfBounds,
}

/// One chunk's worth of voxels in a flat array, all Air after construction.
#[derive(Debug, Clone)]
pub struct Chunk {
    size: IVec3,
    voxels: Vec<Voxel>,
}

impl Chunk {
    pub fn new(size: IVec3) -> Self {
        let volume = (size.x * size.y * size.z) as usize;
        Self {
            size,
            voxels: vec![Voxel::Air; volume],
        }
    }

    pub fn size(&self) -> IVec3 {
        self.size
    }

    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Result<Voxel, ChunkError> {
        if !self.in_bounds(x, y, z) {
            return Err(ChunkError::OutOfBounds);
        }
        Ok(self.voxels[self.index(x, y, z)])
    }

    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> Result<(), ChunkError> {
        if !self.in_bounds(x, y, z) {
            return Err(ChunkError::OutOfBounds);
        }
        let index = self.index(x, y, z);
        self.voxels[index] = voxel;
        Ok(())
    }

    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.size.x && y >= 0 && y < self.size.y && z >= 0 && z < self.size.z
    }

    // Row-major: x runs fastest, then y, then z. The world layer relies on
    // this ordering.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        (x + y * self.size.x + z * self.size.x * self.size.y) as usize
    }
}
