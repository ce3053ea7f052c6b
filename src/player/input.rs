use glam::Vec3;

/// Per-frame intent state handed over by the embedding engine.
///
/// The window/input layer refreshes this once per frame, before
/// `VoxelEngine::update`: the interaction flags from whatever buttons it
/// polls, and the view from whatever camera it integrates.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub place: bool,
    pub remove: bool,
    pub camera_position: Vec3,
    pub camera_forward: Vec3,
}

impl FrameInput {
    /// Clears the one-shot intents; the camera fields persist until the next
    /// refresh.
    pub fn reset(&mut self) {
        self.place = false;
        self.remove = false;
    }
}
