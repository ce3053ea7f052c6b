use serde::{Deserialize, Serialize};

use crate::world::Voxel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Maximum block interaction distance in world units.
    pub reach: f32,
    /// Raw voxel id written on placement; validated through `Voxel::from_id`
    /// when the engine starts.
    pub place_block: u8,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            reach: 10.0,
            place_block: Voxel::Stone as u8,
        }
    }
}
