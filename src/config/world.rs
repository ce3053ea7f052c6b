use glam::IVec3;
use serde::{Deserialize, Serialize};

/// World extents, fixed for the process lifetime: the chunk grid per axis
/// and the voxel extent of each chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub chunk_width: u32,
    pub chunk_height: u32,
    pub chunk_depth: u32,
}

impl WorldConfig {
    pub fn grid_extent(&self) -> IVec3 {
        IVec3::new(self.width as i32, self.height as i32, self.depth as i32)
    }

    pub fn chunk_extent(&self) -> IVec3 {
        IVec3::new(
            self.chunk_width as i32,
            self.chunk_height as i32,
            self.chunk_depth as i32,
        )
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            depth: 1,
            chunk_width: 16,
            chunk_height: 16,
            chunk_depth: 16,
        }
    }
}
