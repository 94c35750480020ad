//! Game state module: the per-tick simulation step.
//!
//! One `step` per tick while playing: resolve food at the upcoming head
//! cell, advance the snake, run the WonQ accretion check, respawn food,
//! then check fatal collisions. Food is resolved before the move so the
//! length law `len == initial_length + score` holds after every step,
//! while growth itself is still consumed by the `advance` call.

use crate::core::config::GameConfig;
use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::types::{Cell, Direction};

#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    /// `None` only when the grid saturated and no free cell remained;
    /// the same tick latches `game_over`.
    food: Option<Cell>,
    /// Permanent for the session once placed (WonQ mode).
    obstacles: Vec<Cell>,
    score: u32,
    /// Food eaten under WonQ mode since the last obstacle drop.
    accretion: u32,
    wonq_mode: bool,
    wonq_threshold: u32,
    rng: SimpleRng,
    game_over: bool,
}

impl GameState {
    /// Start a fresh game: snake centered and heading right, food spawned
    /// clear of the body, score zero.
    pub fn new(config: &GameConfig, wonq_mode: bool, seed: u32) -> Self {
        let grid = Grid::new(config.width, config.height);
        let snake = Snake::new(grid.center(), config.initial_snake_length, Direction::Right);

        let mut game = Self {
            grid,
            snake,
            food: None,
            obstacles: Vec::new(),
            score: 0,
            accretion: 0,
            wonq_mode,
            wonq_threshold: config.wonq_threshold,
            rng: SimpleRng::new(seed),
            game_over: false,
        };

        game.food = game.spawn_food();
        if game.food.is_none() {
            // Degenerate config: the snake already fills the grid.
            game.game_over = true;
        }
        game
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn accretion_counter(&self) -> u32 {
        self.accretion
    }

    pub fn wonq_mode(&self) -> bool {
        self.wonq_mode
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Forward a direction request to the snake. Ignored after game over.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        self.snake.change_direction(direction);
    }

    /// Advance the simulation by one tick.
    ///
    /// No-op once the game is over; until a reset, no snake, food, or
    /// obstacle mutation happens.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        // Food at the upcoming head cell is resolved before the move so the
        // tail is retained by this very advance.
        let ate = self.food == Some(self.snake.next_head());
        if ate {
            self.score += 1;
            self.snake.grow();
        }

        self.snake.advance();

        if ate {
            if self.wonq_mode {
                self.accretion += 1;
                if self.accretion >= self.wonq_threshold {
                    // The tail cell was retained this tick, so this is the
                    // former tail position.
                    self.obstacles.push(self.snake.tail());
                    self.accretion = 0;
                }
            }

            self.food = self.spawn_food();
            if self.food.is_none() {
                // Grid saturated: the point above still counts, but the
                // session cannot continue.
                self.game_over = true;
            }
        }

        let head = self.snake.head();
        if !self.grid.in_bounds(head)
            || self.snake.self_collision()
            || (self.wonq_mode && self.obstacles.contains(&head))
        {
            self.game_over = true;
        }
    }

    /// Place food on a uniformly random cell outside snake and obstacles.
    fn spawn_food(&mut self) -> Option<Cell> {
        let snake = &self.snake;
        let obstacles = &self.obstacles;
        self.grid
            .random_free_cell(&mut self.rng, |cell| {
                snake.occupies(cell) || obstacles.contains(&cell)
            })
    }
}
