//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Default grid dimensions (cells).
pub const GRID_WIDTH: i16 = 32;
pub const GRID_HEIGHT: i16 = 22;

/// Default snake length at session start.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tick interval per speed level (milliseconds per simulation step).
pub const SPEED_LEVELS_MS: [u32; 5] = [250, 180, 120, 80, 50];
pub const SPEED_NAMES: [&str; 5] = ["Sluggish", "Slow", "Normal", "Fast", "Insane"];
pub const DEFAULT_SPEED_INDEX: usize = 2;

/// Food items eaten in WonQ mode before an obstacle is deposited.
pub const WONQ_THRESHOLD: u32 = 5;

/// A single grid cell. Signed so a head that just crossed the boundary is
/// representable during the tick that ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Snake movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta vector, y axis pointing down (terminal rows).
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Discrete input events delivered by the terminal adapter.
///
/// The session routes these according to its current status; the adapter
/// never mutates game state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    Direction(Direction),
    MenuUp,
    MenuDown,
    MenuConfirm,
    MenuBack,
    /// Speed level delta, clamped to the speed table bounds.
    ChangeSpeed(i8),
    ToggleWonq,
    Quit,
}

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    MainMenu,
    Settings,
    Playing,
    GameOver,
    Quitting,
}

impl SessionStatus {
    /// Quitting is terminal; the runner tears down after seeing it.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Quitting)
    }
}
