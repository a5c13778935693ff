/// Game configuration constants.
///
/// This module defines the default gameplay parameters (grid dimensions, how many
/// obstacles and targets are placed, tick rules) and the [`GameConfig`] built from them.
use serde::{Deserialize, Serialize};

use crate::game::error::{GameError, GameResult};
use crate::game::types::Position;

/// Number of columns in the game grid.
pub const GRID_WIDTH: i32 = 10;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: i32 = 10;

/// Stationary obstacles placed at session start.
pub const STATIC_OBSTACLE_COUNT: usize = 10;

/// Obstacles that drift one row down every tick.
pub const FALLING_OBSTACLE_COUNT: usize = 3;

/// Snails placed at session start.
pub const SNAIL_COUNT: usize = 1;

/// Number of wandering targets (one per non-player color).
pub const TARGET_COLOR_COUNT: usize = 7;

/// Ticks without a homecoming after which the last follower may stray.
pub const STRAY_AFTER_TICKS: u32 = 20;

/// Score for finding a calm target.
pub const FOUND_SCORE: u32 = 10;

/// Score for finding an agitated target.
pub const AGITATED_FOUND_SCORE: u32 = 15;

/// Per-tick chance that a missing target becomes agitated.
pub const AGITATION_CHANCE: f64 = 0.1;

/// Per-tick chance that a calm missing target moves.
pub const WANDER_CHANCE: f64 = 0.3;

/// Per-tick chance that an agitated missing target moves.
pub const AGITATED_WANDER_CHANCE: f64 = 0.8;

/// How many recent positions an entity remembers.
pub const PATH_HISTORY_CAPACITY: usize = 64;

/// Parameters for building a [`crate::game::session::GameSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub static_obstacle_count: usize,
    pub falling_obstacle_count: usize,
    pub snail_count: usize,
    pub target_color_count: usize,
    /// Fixed home cell. `None` places home on a random free cell.
    pub home: Option<Position>,
    pub stray_after_ticks: u32,
    pub found_score: u32,
    pub agitated_found_score: u32,
    pub agitation_chance: f64,
    pub wander_chance: f64,
    pub agitated_wander_chance: f64,
    /// Seed for the shared random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            static_obstacle_count: STATIC_OBSTACLE_COUNT,
            falling_obstacle_count: FALLING_OBSTACLE_COUNT,
            snail_count: SNAIL_COUNT,
            target_color_count: TARGET_COLOR_COUNT,
            home: None,
            stray_after_ticks: STRAY_AFTER_TICKS,
            found_score: FOUND_SCORE,
            agitated_found_score: AGITATED_FOUND_SCORE,
            agitation_chance: AGITATION_CHANCE,
            wander_chance: WANDER_CHANCE,
            agitated_wander_chance: AGITATED_WANDER_CHANCE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields fall back to the defaults above.
    pub fn from_json(raw: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(raw)
            .map_err(|e| GameError::InvalidConfig(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Total entities the session places: home, seeker, obstacles, snails and targets.
    pub fn entity_count(&self) -> usize {
        2 + self.static_obstacle_count
            + self.falling_obstacle_count
            + self.snail_count
            + self.target_color_count
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.target_color_count == 0 {
            return Err(GameError::InvalidConfig(
                "at least one target is needed or the game is won before it starts".to_string(),
            ));
        }
        for (name, p) in [
            ("agitation_chance", self.agitation_chance),
            ("wander_chance", self.wander_chance),
            ("agitated_wander_chance", self.agitated_wander_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        if let Some(home) = self.home {
            if home.x < 0 || home.y < 0 || home.x >= self.width || home.y >= self.height {
                return Err(GameError::InvalidConfig(format!(
                    "home {home} lies outside the {}x{} grid",
                    self.width, self.height
                )));
            }
        }
        // Seeker shares the home cell.
        let cells = (self.width as usize).saturating_mul(self.height as usize);
        if self.entity_count() - 1 > cells {
            return Err(GameError::InvalidConfig(format!(
                "{} entities do not fit on {cells} cells",
                self.entity_count()
            )));
        }
        Ok(())
    }
}
