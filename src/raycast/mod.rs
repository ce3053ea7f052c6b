//! Fixed-step ray marching for block picking.
//!
//! The marcher advances in small fixed increments and rounds to the nearest
//! block at every step. That deliberately trades exactness for simplicity:
//! at grazing angles the ray can tunnel past a corner a voxel-traversal
//! algorithm would catch. With the step length two orders of magnitude below
//! the voxel size the error is invisible at interaction ranges.

use glam::{IVec3, Vec3};

use crate::world::World;

pub mod face;

/// Number of increments a cast is divided into, regardless of distance.
pub const RAY_STEPS: u32 = 3000;

#[derive(Debug, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Outcome of a single cast. Produced fresh per call, never stored.
/// `position` and `block` are only meaningful when `hit` is set.
#[derive(Debug, Clone)]
pub struct RaycastResult {
    pub hit: bool,
    pub position: Vec3,
    pub block: IVec3,
    pub distance: f32,
}

impl RaycastResult {
    fn miss(position: Vec3, distance: f32) -> Self {
        Self {
            hit: false,
            position,
            block: IVec3::ZERO,
            distance,
        }
    }
}

/// Marches `ray` through the world and returns the first non-Air voxel
/// within `max_distance`, or a miss.
///
/// Out-of-world samples are not hits and do not stop the march; the ray may
/// leave the grid and re-enter it. Air continues the march. Everything else
/// stops it.
pub fn cast(world: &World, ray: &Ray, max_distance: f32) -> RaycastResult {
    let step_length = max_distance / RAY_STEPS as f32;
    let delta = ray.direction * step_length;
    let mut position = ray.origin;

    for step in 1..=RAY_STEPS {
        position += delta;
        let block = position.round().as_ivec3();

        let Ok(voxel) = world.voxel_at(block) else {
            continue;
        };
        if voxel.is_air() {
            continue;
        }

        return RaycastResult {
            hit: true,
            position,
            block,
            distance: step as f32 * step_length,
        };
    }

    RaycastResult::miss(ray.at(max_distance), max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Voxel;

    fn empty_world() -> World {
        World::new(IVec3::ONE, IVec3::splat(16))
    }

    #[test]
    fn test_miss_in_empty_world() {
        let world = empty_world();
        for direction in [Vec3::X, Vec3::NEG_Y, Vec3::new(1.0, -2.0, 0.5)] {
            let result = cast(&world, &Ray::new(Vec3::new(8.0, 8.0, 8.0), direction), 10.0);
            assert!(!result.hit);
            assert_eq!(result.distance, 10.0);
        }
    }

    #[test]
    fn test_hits_floor_straight_down() {
        let mut world = empty_world();
        world.fill_layer(0, Voxel::Dirt).unwrap();

        let ray = Ray::new(Vec3::new(8.0, 5.0, 8.0), Vec3::NEG_Y);
        let result = cast(&world, &ray, 10.0);

        assert!(result.hit);
        assert_eq!(result.block, IVec3::new(8, 0, 8));
        // stops as soon as y rounds down to the floor plane
        assert!(result.position.y < 0.5);
        assert!(result.position.y > 0.4);
        assert!((result.distance - (5.0 - result.position.y)).abs() < 1e-3);
    }

    #[test]
    fn test_first_hit_along_ray_wins() {
        let mut world = empty_world();
        world.set_voxel(IVec3::new(4, 8, 8), Voxel::Stone).unwrap();
        world.set_voxel(IVec3::new(10, 8, 8), Voxel::Stone).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 8.0, 8.0), Vec3::X);
        let result = cast(&world, &ray, 10.0);

        assert!(result.hit);
        assert_eq!(result.block, IVec3::new(4, 8, 8));

        // nothing non-Air closer than the reported hit
        let step_length = 10.0 / RAY_STEPS as f32;
        let mut probe = ray.origin;
        loop {
            probe += ray.direction * step_length;
            let block = probe.round().as_ivec3();
            if block == result.block {
                break;
            }
            if let Ok(voxel) = world.voxel_at(block) {
                assert!(voxel.is_air());
            }
        }
    }

    #[test]
    fn test_ray_starting_outside_world_reenters() {
        let mut world = empty_world();
        world.set_voxel(IVec3::new(8, 8, 8), Voxel::Grass).unwrap();

        let ray = Ray::new(Vec3::new(-3.0, 8.0, 8.0), Vec3::X);
        let result = cast(&world, &ray, 15.0);

        assert!(result.hit);
        assert_eq!(result.block, IVec3::new(8, 8, 8));
    }

    #[test]
    fn test_out_of_reach() {
        let mut world = empty_world();
        world.set_voxel(IVec3::new(8, 0, 8), Voxel::Dirt).unwrap();

        let ray = Ray::new(Vec3::new(8.0, 12.0, 8.0), Vec3::NEG_Y);
        assert!(!cast(&world, &ray, 3.0).hit);
        assert!(cast(&world, &ray, 12.0).hit);
    }
}
