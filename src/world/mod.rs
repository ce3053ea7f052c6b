//! Chunked voxel storage and world-space coordinate translation.

pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod voxel;

// Re-export commonly used types
pub use self::core::{World, WorldError};
pub use chunk::{Chunk, ChunkError};
pub use chunk_coord::ChunkCoord;
pub use voxel::{Voxel, VoxelError};
