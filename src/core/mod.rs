//! Core game simulation: deterministic, single-threaded, no I/O.

pub mod config;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use config::GameConfig;
pub use game::GameState;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
