//! Configuration types for level generation.

use serde::{Deserialize, Serialize};

/// Level dimensions and rendering hints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Width of the level grid
    pub width: i32,
    /// Height of the level grid
    pub height: i32,
    /// Nominal tile size in pixels, for external renderers. The engine
    /// itself never reads this.
    pub tile_size: i32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 40,
            tile_size: 48,
        }
    }
}

/// Cellular-automaton smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Number of simulation steps to run
    pub steps: u32,
    /// Neighbor-count threshold for a free cell to become a wall
    pub birth_limit: u32,
    /// Neighbor-count threshold above which a wall cell dies
    pub death_limit: u32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            steps: 3,
            birth_limit: 4,
            death_limit: 3,
        }
    }
}

/// Full generation pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Level dimensions
    pub level: LevelConfig,
    /// Length of each scattered wall segment
    pub wall_size: i32,
    /// Per-cell probability of seeding a wall during the noise pass (0.0 to 1.0)
    pub chance_to_start_alive: f32,
    /// Smoothing parameters
    pub smoothing: SmoothingConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            level: LevelConfig::default(),
            wall_size: 4,
            chance_to_start_alive: 0.4,
            smoothing: SmoothingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let level_config = LevelConfig::default();
        assert_eq!(level_config.width, 50);
        assert_eq!(level_config.height, 40);
        assert_eq!(level_config.tile_size, 48);

        let smoothing = SmoothingConfig::default();
        assert_eq!(smoothing.steps, 3);
        assert_eq!(smoothing.birth_limit, 4);
        assert_eq!(smoothing.death_limit, 3);

        let config = GeneratorConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.wall_size, 4);
        assert!(config.chance_to_start_alive > 0.0);
    }

    #[test]
    fn test_generator_config_serialization() {
        let config = GeneratorConfig {
            seed: 42,
            wall_size: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.wall_size, deserialized.wall_size);
        assert_eq!(config.level.width, deserialized.level.width);
        assert_eq!(
            config.chance_to_start_alive,
            deserialized.chance_to_start_alive
        );
    }
}
