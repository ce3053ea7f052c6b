use anyhow::Result;
use glam::Vec3;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use voxelbox::{EngineConfig, FrameInput, RecordingRenderer, VoxelEngine};

// Headless harness: drives the same per-frame boundary a window loop would,
// with a recording renderer standing in for the graphics engine.
fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Initializing voxelbox...");

    let config = match EngineConfig::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to default config: {e:#}");
            EngineConfig::default()
        }
    };

    let mut engine = VoxelEngine::new(config)?;
    let mut renderer = RecordingRenderer::new();

    let mut input = FrameInput {
        camera_position: Vec3::new(8.0, 5.0, 8.0),
        camera_forward: Vec3::NEG_Y,
        ..FrameInput::default()
    };

    engine.update(&input)?;
    engine.draw(&mut renderer);
    info!(
        "Frame 0: {} voxels drawn, selection {:?}",
        renderer.voxels.len(),
        engine.selected()
    );

    input.place = true;
    engine.update(&input)?;
    input.reset();
    renderer.clear();
    engine.draw(&mut renderer);
    info!("Frame 1 (place): {} voxels drawn", renderer.voxels.len());

    input.remove = true;
    engine.update(&input)?;
    input.reset();
    renderer.clear();
    engine.draw(&mut renderer);
    info!(
        "Frame 2 (remove): {} voxels drawn, selection {:?}",
        renderer.voxels.len(),
        engine.selected()
    );

    Ok(())
}
