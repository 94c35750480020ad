//! Terminal input adapter.
//!
//! Maps `crossterm` key events into [`crate::types::InputIntent`] values.
//! The mapping is status-aware: arrow keys steer the snake while playing
//! and navigate menus everywhere else.

pub mod map;

pub use map::{map_key, should_quit};
