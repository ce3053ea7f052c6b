//! The draw seam between the voxel core and the embedding graphics engine.

use glam::IVec3;

/// Everything the core asks of a renderer: one call per visible voxel with
/// its texture slot, and at most one selection overlay per frame. Matrices,
/// shaders and textures stay on the graphics side of the seam.
pub trait VoxelRenderer {
    fn draw_voxel(&mut self, position: IVec3, texture: u32);

    fn draw_selection(&mut self, position: IVec3);
}

/// Records draw calls instead of issuing them. Backs the headless demo and
/// the tests that pin the frame output.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub voxels: Vec<(IVec3, u32)>,
    pub selection: Option<IVec3>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.voxels.clear();
        self.selection = None;
    }
}

impl VoxelRenderer for RecordingRenderer {
    fn draw_voxel(&mut self, position: IVec3, texture: u32) {
        self.voxels.push((position, texture));
    }

    fn draw_selection(&mut self, position: IVec3) {
        self.selection = Some(position);
    }
}
