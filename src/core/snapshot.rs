//! Read-only state view handed to the renderer once per tick.
//!
//! Callers keep one `GameSnapshot` and refill it through
//! `Session::snapshot_into`, reusing the cell buffers frame to frame. The
//! core never holds a reference into a snapshot, so the renderer can read
//! it freely until the next tick.

use crate::types::{Cell, Direction, SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake body, head first. Empty outside Playing/GameOver.
    pub snake: Vec<Cell>,
    pub direction: Direction,
    /// `None` in menu states or when the grid saturated on the final tick.
    pub food: Option<Cell>,
    pub obstacles: Vec<Cell>,
    pub score: u32,
    pub status: SessionStatus,
    pub speed_index: usize,
    pub wonq_mode: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.direction = Direction::Right;
        self.food = None;
        self.obstacles.clear();
        self.score = 0;
        self.status = SessionStatus::MainMenu;
        self.speed_index = 0;
        self.wonq_mode = false;
    }

    pub fn playing(&self) -> bool {
        self.status == SessionStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            direction: Direction::Right,
            food: None,
            obstacles: Vec::new(),
            score: 0,
            status: SessionStatus::MainMenu,
            speed_index: 0,
            wonq_mode: false,
        }
    }
}
