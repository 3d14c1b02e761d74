//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a session can be built
//! from JSON. `Tuning::default()` is the classic layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena / clock ===
    pub canvas_size: f32,
    /// Logical time units per tick
    pub tick_period: u32,
    /// Logical time units between rock shots
    pub rock_fire_period: u32,

    // === Ship ===
    pub ship_radius: f32,
    /// Distance from the bottom edge to the ship center
    pub ship_bottom_offset: f32,
    pub ship_slide_step: f32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Ticks a ship bullet survives
    pub bullet_lifetime: u64,
    /// Ticks a rock bullet survives
    pub rock_bullet_lifetime: u64,
    pub rock_bullet_velocity: Vec2,

    // === Rocks ===
    pub rock_radius: f32,
    pub rock_count: usize,
    pub rock_columns: usize,
    pub rock_spacing: f32,
    /// Origin of each row; rock `i` in row `r` sits at `origin + (i * spacing, 0)`
    pub rock_row_origins: Vec<Vec2>,
    pub rock_velocity: Vec2,

    // === Scoring ===
    pub score_per_rock: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            tick_period: TICK_PERIOD,
            rock_fire_period: ROCK_FIRE_PERIOD,

            ship_radius: SHIP_RADIUS,
            ship_bottom_offset: SHIP_BOTTOM_OFFSET,
            ship_slide_step: SHIP_SLIDE_STEP,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,
            rock_bullet_lifetime: ROCK_BULLET_LIFETIME,
            rock_bullet_velocity: Vec2::from(ROCK_BULLET_VELOCITY),

            rock_radius: ROCK_RADIUS,
            rock_count: ROCK_COUNT,
            rock_columns: ROCK_COLUMNS,
            rock_spacing: ROCK_SPACING,
            rock_row_origins: ROCK_ROW_ORIGINS.iter().copied().map(Vec2::from).collect(),
            rock_velocity: Vec2::from(ROCK_VELOCITY),

            score_per_rock: SCORE_PER_ROCK,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their default
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.canvas_size > 0.0) {
            return Err(GameError::TuningOutOfRange("canvas_size"));
        }
        if self.tick_period == 0 {
            return Err(GameError::TuningOutOfRange("tick_period"));
        }
        if self.rock_fire_period == 0 {
            return Err(GameError::TuningOutOfRange("rock_fire_period"));
        }
        if self.rock_columns == 0 {
            return Err(GameError::TuningOutOfRange("rock_columns"));
        }
        if self.rock_count > self.rock_columns * self.rock_row_origins.len() {
            return Err(GameError::TuningOutOfRange("rock_count"));
        }
        Ok(())
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "space_rocks_tuning";

    /// Load tuning from LocalStorage, seeding it with the defaults when absent (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        let Some(storage) = storage else {
            log::info!("No LocalStorage, using default tuning");
            return Self::default();
        };

        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from LocalStorage");
                    tuning
                }
                Err(e) => {
                    log::warn!("{}, using default tuning", e);
                    Self::default()
                }
            },
            _ => {
                let tuning = Self::default();
                match tuning.to_json() {
                    Ok(json) => {
                        if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                            log::warn!("Could not store default tuning");
                        }
                    }
                    Err(e) => log::warn!("{}", e),
                }
                tuning
            }
        }
    }

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Where the ship starts: bottom-center of the canvas
    pub fn ship_start(&self) -> Vec2 {
        Vec2::new(
            self.canvas_size / 2.0,
            self.canvas_size - self.ship_bottom_offset,
        )
    }
}
