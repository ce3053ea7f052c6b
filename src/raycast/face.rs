use glam::IVec3;

use super::RaycastResult;

/// The six axis-aligned faces of a voxel cube, named from the block's point
/// of view (East is +x, Up is +y, South is +z). `None` marks a degenerate
/// hit with no dominant axis; callers must not place against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    West,
    East,
    North,
    South,
    None,
}

impl Direction {
    pub fn normal(self) -> IVec3 {
        match self {
            Self::Up => IVec3::new(0, 1, 0),
            Self::Down => IVec3::new(0, -1, 0),
            Self::East => IVec3::new(1, 0, 0),
            Self::West => IVec3::new(-1, 0, 0),
            Self::South => IVec3::new(0, 0, 1),
            Self::North => IVec3::new(0, 0, -1),
            Self::None => IVec3::ZERO,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::South => Self::North,
            Self::North => Self::South,
            Self::None => Self::None,
        }
    }
}

/// Resolves which face of the struck block the ray landed on.
///
/// Per axis, `block - position` measures how far the hit sits from the block
/// center. The axis whose absolute difference is strictly greater than both
/// others picks the face (checked in x, y, z order); the sign picks the side
/// (a negative difference means the hit came from the positive side). A hit
/// with no strictly dominant axis, or a miss, resolves to `Direction::None`.
pub fn resolve(result: &RaycastResult) -> Direction {
    if !result.hit {
        return Direction::None;
    }

    let diff = result.block.as_vec3() - result.position;
    let abs = diff.abs();

    if abs.x > abs.y && abs.x > abs.z {
        if diff.x < 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if abs.y > abs.x && abs.y > abs.z {
        if diff.y < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if abs.z > abs.x && abs.z > abs.y {
        if diff.z < 0.0 {
            Direction::South
        } else {
            Direction::North
        }
    } else {
        Direction::None
    }
}

/// Coordinate of the cell just outside the struck face, where a placement
/// would go. `None` when no face is dominant.
pub fn placement_target(result: &RaycastResult) -> Option<IVec3> {
    match resolve(result) {
        Direction::None => None,
        direction => Some(result.block + direction.normal()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn hit(position: Vec3, block: IVec3) -> RaycastResult {
        RaycastResult {
            hit: true,
            position,
            block,
            distance: 1.0,
        }
    }

    #[test]
    fn test_hit_from_above_is_up() {
        let result = hit(Vec3::new(0.0, 1.49, 0.0), IVec3::new(0, 1, 0));
        assert_eq!(resolve(&result), Direction::Up);
        assert_eq!(placement_target(&result), Some(IVec3::new(0, 2, 0)));
    }

    #[test]
    fn test_all_six_faces() {
        let block = IVec3::new(4, 4, 4);
        let center = Vec3::new(4.0, 4.0, 4.0);
        let cases = [
            (Vec3::new(0.49, 0.0, 0.0), Direction::East),
            (Vec3::new(-0.49, 0.0, 0.0), Direction::West),
            (Vec3::new(0.0, 0.49, 0.0), Direction::Up),
            (Vec3::new(0.0, -0.49, 0.0), Direction::Down),
            (Vec3::new(0.0, 0.0, 0.49), Direction::South),
            (Vec3::new(0.0, 0.0, -0.49), Direction::North),
        ];
        for (offset, direction) in cases {
            let result = hit(center + offset, block);
            assert_eq!(resolve(&result), direction);
            assert_eq!(
                placement_target(&result),
                Some(block + direction.normal())
            );
        }
    }

    #[test]
    fn test_no_dominant_axis_is_none() {
        // dead center, an edge, and a corner
        for position in [
            Vec3::new(4.0, 4.0, 4.0),
            Vec3::new(4.3, 4.3, 4.0),
            Vec3::new(4.2, 4.2, 4.2),
        ] {
            let result = hit(position, IVec3::new(4, 4, 4));
            assert_eq!(resolve(&result), Direction::None);
            assert_eq!(placement_target(&result), None);
        }
    }

    #[test]
    fn test_miss_resolves_to_none() {
        let result = RaycastResult {
            hit: false,
            position: Vec3::ZERO,
            block: IVec3::ZERO,
            distance: 0.0,
        };
        assert_eq!(resolve(&result), Direction::None);
        assert_eq!(placement_target(&result), None);
    }

    #[test]
    fn test_opposites() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::South,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.normal(), -direction.opposite().normal());
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }
}
