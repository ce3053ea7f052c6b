use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{GameplayConfig, WorldConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub gameplay: GameplayConfig,
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Reads the engine config from the platform config directory, writing
    /// the defaults there first if no file exists yet. A malformed file is
    /// an error, not a silent reset.
    pub fn load_or_create() -> Result<Self> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        if !config_path.exists() {
            let default_config = Self::default();
            let toml_content = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, toml_content)
                .context("Failed to write default config")?;
            return Ok(default_config);
        }

        Self::from_file(&config_path)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "voxelbox", "voxelbox")
        .context("Couldn't determine project directory")?;
    Ok(proj_dirs.config_dir().join("engine.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = EngineConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.world.chunk_width, 16);
        assert_eq!(parsed.gameplay.reach, 10.0);
        assert_eq!(parsed.gameplay.place_block, config.gameplay.place_block);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: EngineConfig = toml::from_str("[gameplay]\nreach = 6.5\nplace_block = 1\n").unwrap();
        assert_eq!(parsed.gameplay.reach, 6.5);
        assert_eq!(parsed.gameplay.place_block, 1);
        assert_eq!(parsed.world.width, 1);
        assert_eq!(parsed.world.chunk_height, 16);
    }
}
