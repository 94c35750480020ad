//! Session state machine: menu, settings, playing, game over, quitting.
//!
//! The session owns the settings and the current `GameState` (if any) and
//! routes every `InputIntent` according to its status. It is the only
//! component the terminal runner talks to.

use crate::core::config::GameConfig;
use crate::core::game::GameState;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::types::{InputIntent, SessionStatus};

pub const MAIN_MENU_ITEMS: [&str; 3] = ["Play", "Settings", "Quit"];
pub const SETTINGS_ITEMS: [&str; 3] = ["Speed", "WonQ Mode", "Back"];
pub const GAME_OVER_ITEMS: [&str; 2] = ["Retry", "Main Menu"];

const SETTINGS_ROW_WONQ: usize = 1;
const SETTINGS_ROW_BACK: usize = 2;

/// Player-tunable settings. The WonQ flag is captured into the game at
/// reset time; toggling it mid-session affects only the next game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub speed_index: usize,
    pub wonq_mode: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    settings: Settings,
    status: SessionStatus,
    game: Option<GameState>,
    main_cursor: usize,
    settings_cursor: usize,
    game_over_cursor: usize,
    /// Hands out a fresh seed per game so Retry does not replay the
    /// previous food layout.
    seed_rng: SimpleRng,
}

impl Session {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let settings = Settings {
            speed_index: config.clamp_speed_index(crate::types::DEFAULT_SPEED_INDEX as i32),
            wonq_mode: false,
        };

        Self {
            config,
            settings,
            status: SessionStatus::MainMenu,
            game: None,
            main_cursor: 0,
            settings_cursor: 0,
            game_over_cursor: 0,
            seed_rng: SimpleRng::new(seed),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn main_cursor(&self) -> usize {
        self.main_cursor
    }

    pub fn settings_cursor(&self) -> usize {
        self.settings_cursor
    }

    pub fn game_over_cursor(&self) -> usize {
        self.game_over_cursor
    }

    pub fn score(&self) -> u32 {
        self.game.as_ref().map_or(0, GameState::score)
    }

    /// Accretion progress for the WonQ side meter; zero outside a game.
    pub fn accretion_counter(&self) -> u32 {
        self.game.as_ref().map_or(0, GameState::accretion_counter)
    }

    /// Milliseconds between simulation steps at the current speed level.
    pub fn tick_interval_ms(&self) -> u32 {
        self.config.speed_levels_ms[self.settings.speed_index]
    }

    /// Apply one input intent. Quitting ignores everything.
    pub fn handle_intent(&mut self, intent: InputIntent) {
        if self.status.is_terminal() {
            return;
        }
        if intent == InputIntent::Quit {
            self.status = SessionStatus::Quitting;
            return;
        }

        match self.status {
            SessionStatus::MainMenu => self.handle_main_menu(intent),
            SessionStatus::Settings => self.handle_settings(intent),
            SessionStatus::Playing => self.handle_playing(intent),
            SessionStatus::GameOver => self.handle_game_over(intent),
            SessionStatus::Quitting => {}
        }
    }

    /// Advance the game by one tick. No-op outside the Playing state.
    pub fn tick(&mut self) {
        if self.status != SessionStatus::Playing {
            return;
        }
        if let Some(game) = self.game.as_mut() {
            game.step();
            if game.game_over() {
                self.status = SessionStatus::GameOver;
                self.game_over_cursor = 0;
            }
        }
    }

    /// Fill `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.status = self.status;
        out.speed_index = self.settings.speed_index;
        out.wonq_mode = self.settings.wonq_mode;

        if let Some(game) = &self.game {
            out.snake.extend(game.snake().cells());
            out.direction = game.snake().direction();
            out.food = game.food();
            out.obstacles.extend_from_slice(game.obstacles());
            out.score = game.score();
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Full reset: fresh snake, food, empty obstacles, score zero. The
    /// current WonQ flag is captured here.
    fn start_game(&mut self) {
        let seed = self.seed_rng.next_u32();
        self.game = Some(GameState::new(&self.config, self.settings.wonq_mode, seed));
        self.status = SessionStatus::Playing;
    }

    fn handle_main_menu(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::MenuUp => {
                self.main_cursor =
                    (self.main_cursor + MAIN_MENU_ITEMS.len() - 1) % MAIN_MENU_ITEMS.len();
            }
            InputIntent::MenuDown => {
                self.main_cursor = (self.main_cursor + 1) % MAIN_MENU_ITEMS.len();
            }
            InputIntent::MenuConfirm => match self.main_cursor {
                0 => self.start_game(),
                1 => {
                    self.settings_cursor = 0;
                    self.status = SessionStatus::Settings;
                }
                _ => self.status = SessionStatus::Quitting,
            },
            _ => {}
        }
    }

    fn handle_settings(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::MenuUp => {
                self.settings_cursor =
                    (self.settings_cursor + SETTINGS_ITEMS.len() - 1) % SETTINGS_ITEMS.len();
            }
            InputIntent::MenuDown => {
                self.settings_cursor = (self.settings_cursor + 1) % SETTINGS_ITEMS.len();
            }
            InputIntent::ChangeSpeed(delta) => self.change_speed(delta),
            InputIntent::ToggleWonq => {
                self.settings.wonq_mode = !self.settings.wonq_mode;
            }
            InputIntent::MenuConfirm => match self.settings_cursor {
                SETTINGS_ROW_WONQ => self.settings.wonq_mode = !self.settings.wonq_mode,
                SETTINGS_ROW_BACK => self.status = SessionStatus::MainMenu,
                _ => {}
            },
            InputIntent::MenuBack => self.status = SessionStatus::MainMenu,
            _ => {}
        }
    }

    fn handle_playing(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::Direction(direction) => {
                if let Some(game) = self.game.as_mut() {
                    game.change_direction(direction);
                }
            }
            // The back key doubles as the in-game quit key.
            InputIntent::MenuBack => self.status = SessionStatus::Quitting,
            _ => {}
        }
    }

    fn handle_game_over(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::MenuUp => {
                self.game_over_cursor =
                    (self.game_over_cursor + GAME_OVER_ITEMS.len() - 1) % GAME_OVER_ITEMS.len();
            }
            InputIntent::MenuDown => {
                self.game_over_cursor = (self.game_over_cursor + 1) % GAME_OVER_ITEMS.len();
            }
            InputIntent::MenuConfirm => match self.game_over_cursor {
                0 => self.start_game(),
                _ => {
                    self.game = None;
                    self.status = SessionStatus::MainMenu;
                }
            },
            InputIntent::MenuBack => {
                self.game = None;
                self.status = SessionStatus::MainMenu;
            }
            _ => {}
        }
    }

    /// Clamp, never wrap: holding a speed key parks at the table edge.
    fn change_speed(&mut self, delta: i8) {
        let target = self.settings.speed_index as i32 + delta as i32;
        self.settings.speed_index = self.config.clamp_speed_index(target);
    }
}
