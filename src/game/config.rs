use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Smallest playable grid; the 3-cell starting snake needs room to move
pub const MIN_GRID_EXTENT: usize = 8;

/// Column the snake's head starts on, matching the classic layout on a
/// 20-cell grid. The starting body extends leftward from here.
pub const START_COLUMN: i32 = 5;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_extent: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Tick interval at the start of a run, in milliseconds
    pub initial_tick_ms: u64,
    /// Amount the tick interval shrinks by per food eaten
    pub tick_step_ms: u64,
    /// Floor the tick interval never drops below
    pub min_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_extent: 20,
            initial_snake_length: 3,
            initial_tick_ms: 150,
            tick_step_ms: 2,
            min_tick_ms: 50,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid extent and tick interval
    pub fn new(grid_extent: usize, initial_tick_ms: u64) -> Self {
        Self {
            grid_extent,
            initial_tick_ms,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 150)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_extent < MIN_GRID_EXTENT {
            bail!("grid extent must be at least {MIN_GRID_EXTENT}");
        }
        // The body spawns leftward from the start column, so the tail must
        // not run off the left edge.
        if self.initial_snake_length == 0 || self.initial_snake_length > START_COLUMN as usize + 1 {
            bail!("initial snake length must fit behind start column {START_COLUMN}");
        }
        if self.min_tick_ms == 0 || self.min_tick_ms > self.initial_tick_ms {
            bail!("tick floor must be positive and no larger than the initial interval");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_extent, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.initial_tick_ms, 150);
        assert_eq!(config.tick_step_ms, 2);
        assert_eq!(config.min_tick_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 100);
        assert_eq!(config.grid_extent, 15);
        assert_eq!(config.initial_tick_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = GameConfig::new(4, 150);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_snake_spawning_off_grid() {
        // Length 6 ends exactly at column 0; length 7 would start the tail
        // out of bounds.
        let config = GameConfig {
            initial_snake_length: 6,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = GameConfig {
            initial_snake_length: 7,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_floor_above_initial_interval() {
        let config = GameConfig {
            initial_tick_ms: 40,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
