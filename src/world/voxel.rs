use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxelError {
    #[error("Invalid voxel type: {0}")]
    InvalidVoxelType(u8),
}

/// Closed set of block types. The numeric id doubles as the texture slot
/// handed to the renderer, so declaration order is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voxel {
    Air,
    Dirt,
    Grass,
    Stone,
    Light,
}

impl Voxel {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn texture_index(self) -> u32 {
        self as u32
    }

    /// The only way to build a voxel from a raw tag. Unknown ids are
    /// reported, never coerced to a fallback type.
    pub fn from_id(id: u8) -> Result<Self, VoxelError> {
        match id {
            0 => Ok(Self::Air),
            1 => Ok(Self::Dirt),
            2 => Ok(Self::Grass),
            3 => Ok(Self::Stone),
            4 => Ok(Self::Light),
            other => Err(VoxelError::InvalidVoxelType(other)),
        }
    }

    pub fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    pub fn is_solid(self) -> bool {
        !self.is_air()
    }
}

impl Display for Voxel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Air => "air",
            Self::Dirt => "dirt",
            Self::Grass => "grass",
            Self::Stone => "stone",
            Self::Light => "light",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for voxel in [Voxel::Air, Voxel::Dirt, Voxel::Grass, Voxel::Stone, Voxel::Light] {
            assert_eq!(Voxel::from_id(voxel.id()).unwrap(), voxel);
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert!(matches!(
            Voxel::from_id(5),
            Err(VoxelError::InvalidVoxelType(5))
        ));
        assert!(matches!(
            Voxel::from_id(255),
            Err(VoxelError::InvalidVoxelType(255))
        ));
    }

    #[test]
    fn test_solidity() {
        assert!(!Voxel::Air.is_solid());
        assert!(Voxel::Dirt.is_solid());
        assert!(Voxel::Light.is_solid());
    }
}
