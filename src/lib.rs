//! Chunked voxel world core: bounds-checked chunk/world storage, fixed-step
//! ray picking, cube-face resolution, and the frame-level game state that
//! ties them together. Window management, input polling and actual GPU work
//! live in the embedding graphics engine, behind [`render::VoxelRenderer`]
//! and [`player::FrameInput`].

pub mod config;
pub mod engine;
pub mod player;
pub mod raycast;
pub mod render;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::gameplay::GameplayConfig;
pub use config::world::WorldConfig;
pub use engine::{Camera, VoxelEngine};
pub use player::FrameInput;
pub use raycast::face::Direction;
pub use raycast::{cast, Ray, RaycastResult, RAY_STEPS};
pub use render::{RecordingRenderer, VoxelRenderer};
pub use world::{Chunk, ChunkCoord, ChunkError, Voxel, VoxelError, World, WorldError};
