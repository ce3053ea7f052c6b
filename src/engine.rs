use anyhow::{Context, Result};
use glam::{IVec3, Vec3};
use log::{debug, info};

use crate::config::EngineConfig;
use crate::player::FrameInput;
use crate::raycast::{self, face, Ray, RaycastResult};
use crate::render::VoxelRenderer;
use crate::world::{Voxel, World, WorldError};

/// Explicit view state, refreshed from input every frame. Nothing else in
/// the engine reads the camera; it exists so the raycast and the renderer
/// agree on one view per frame.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
        }
    }
}

/// Top-level game state: the world, the view, the scene light, and the
/// transient selection overlay.
///
/// The selection is replaced wholesale every update and never written into
/// chunk storage, so there is no cleanup pass to run between frames.
pub struct VoxelEngine {
    world: World,
    camera: Camera,
    light_position: Vec3,
    selected: Option<IVec3>,
    place_voxel: Voxel,
    config: EngineConfig,
}

impl VoxelEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let place_voxel = Voxel::from_id(config.gameplay.place_block)
            .context("Configured placement block is not a known voxel type")?;

        let mut world = World::from_config(&config.world);
        // reference scene: a flat ground plane, everything else Air
        world.fill_layer(0, Voxel::Dirt)?;

        let bounds = world.bounds();
        info!(
            "World allocated: {}x{}x{} voxels, placing {}",
            bounds.x, bounds.y, bounds.z, place_voxel
        );

        Ok(Self {
            world,
            camera: Camera::default(),
            light_position: Vec3::new(5.0, 5.0, 5.0),
            selected: None,
            place_voxel,
            config,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Block currently under the crosshair, if any.
    pub fn selected(&self) -> Option<IVec3> {
        self.selected
    }

    pub fn light_position(&self) -> Vec3 {
        self.light_position
    }

    pub fn set_light_position(&mut self, position: Vec3) {
        self.light_position = position;
    }

    /// Runs one interaction cycle: refresh the view, cast a single ray, and
    /// apply at most one mutation. Remove wins over place when both intents
    /// are set, so the one raycast stays authoritative for the whole frame.
    pub fn update(&mut self, input: &FrameInput) -> Result<(), WorldError> {
        self.camera.position = input.camera_position;
        self.camera.forward = input.camera_forward;

        if self.camera.forward.length_squared() < f32::EPSILON {
            self.selected = None;
            return Ok(());
        }

        let ray = Ray::new(self.camera.position, self.camera.forward);
        let result = raycast::cast(&self.world, &ray, self.config.gameplay.reach);

        self.selected = result.hit.then_some(result.block);
        if !result.hit {
            return Ok(());
        }

        if input.remove {
            self.world.set_voxel(result.block, Voxel::Air)?;
            debug!("Removed voxel at {}", result.block);
        } else if input.place {
            self.place_against(&result)?;
        }

        Ok(())
    }

    fn place_against(&mut self, result: &RaycastResult) -> Result<(), WorldError> {
        let Some(target) = face::placement_target(result) else {
            debug!("Hit at {} has no dominant face, skipping placement", result.position);
            return Ok(());
        };

        match self.world.voxel_at(target) {
            Ok(Voxel::Air) => {
                self.world.set_voxel(target, self.place_voxel)?;
                debug!("Placed {} at {}", self.place_voxel, target);
            }
            Ok(occupant) => {
                debug!("Placement target {} already holds {}", target, occupant);
            }
            Err(WorldError::OutOfBounds) => {
                debug!("Placement target {} is outside the world", target);
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Emits the frame's draw calls: every non-Air voxel with its texture
    /// slot, then at most one selection overlay. Never mutates the world.
    pub fn draw(&self, renderer: &mut dyn VoxelRenderer) {
        let bounds = self.world.bounds();
        for x in 0..bounds.x {
            for y in 0..bounds.y {
                for z in 0..bounds.z {
                    let position = IVec3::new(x, y, z);
                    match self.world.voxel_at(position) {
                        Ok(voxel) if voxel.is_solid() => {
                            renderer.draw_voxel(position, voxel.texture_index());
                        }
                        _ => {}
                    }
                }
            }
        }

        if let Some(selected) = self.selected {
            renderer.draw_selection(selected);
        }
    }
}
