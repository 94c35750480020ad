//! Construction-time configuration for a game session.

use crate::types::{
    DEFAULT_SPEED_INDEX, GRID_HEIGHT, GRID_WIDTH, INITIAL_SNAKE_LENGTH, SPEED_LEVELS_MS,
    WONQ_THRESHOLD,
};

/// Everything the simulation needs to know up front. The session captures a
/// copy at construction; nothing here changes mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i16,
    pub height: i16,
    pub initial_snake_length: usize,
    /// Tick interval per speed level, fastest last.
    pub speed_levels_ms: Vec<u32>,
    /// Food items eaten in WonQ mode before an obstacle is deposited.
    pub wonq_threshold: u32,
}

impl GameConfig {
    /// Index of the slowest speed level.
    pub fn min_speed_index(&self) -> usize {
        0
    }

    /// Index of the fastest speed level.
    pub fn max_speed_index(&self) -> usize {
        self.speed_levels_ms.len().saturating_sub(1)
    }

    /// Clamp a speed index into the table bounds (no wraparound).
    pub fn clamp_speed_index(&self, index: i32) -> usize {
        index.clamp(0, self.max_speed_index() as i32) as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            speed_levels_ms: SPEED_LEVELS_MS.to_vec(),
            wonq_threshold: WONQ_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_speed_index_saturates() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_speed_index(-1), 0);
        assert_eq!(config.clamp_speed_index(0), 0);
        assert_eq!(
            config.clamp_speed_index(i32::MAX),
            config.max_speed_index()
        );
    }
}
