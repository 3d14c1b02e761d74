//! Space Rocks - A ship-vs-rocks arcade shooter
//!
//! Core modules:
//! - `sim`: Pure simulation (vectors, bodies, motion, collisions, event reducer)
//! - `input`: Keyboard transitions to simulation events
//! - `clock`: Fixed-period tick and rock-fire scheduling
//! - `session`: Game loop owner (fold, render, restart)
//! - `view`: In-memory scene kept in sync with each snapshot
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod error;
pub mod input;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod view;

pub use error::GameError;
pub use session::{Renderer, Session, SessionStatus};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Square canvas side length
    pub const CANVAS_SIZE: f32 = 600.0;
    /// Logical time units per tick
    pub const TICK_PERIOD: u32 = 10;
    /// Logical time units between rock shots
    pub const ROCK_FIRE_PERIOD: u32 = 1000;

    /// Ship defaults - bottom-center of the canvas
    pub const SHIP_RADIUS: f32 = 20.0;
    pub const SHIP_BOTTOM_OFFSET: f32 = 50.0;
    /// Horizontal slide per tick while an arrow key is held
    pub const SHIP_SLIDE_STEP: f32 = 4.0;

    /// Bullet defaults (shared by ship and rock bullets)
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 3.0;
    /// Ship bullets live while `now - created <= BULLET_LIFETIME`
    pub const BULLET_LIFETIME: u64 = 120;
    pub const ROCK_BULLET_LIFETIME: u64 = 50;
    pub const ROCK_BULLET_VELOCITY: (f32, f32) = (0.0, 10.0);

    /// Rock layout: two rows of up to `ROCK_COLUMNS`
    pub const ROCK_RADIUS: f32 = 20.0;
    pub const ROCK_COUNT: usize = 10;
    pub const ROCK_COLUMNS: usize = 5;
    pub const ROCK_SPACING: f32 = 75.0;
    pub const ROCK_ROW_ORIGINS: [(f32, f32); 2] = [(150.0, 95.0), (-230.0, 185.0)];
    pub const ROCK_VELOCITY: (f32, f32) = (0.3, 0.1);

    /// Points per destroyed rock
    pub const SCORE_PER_ROCK: u32 = 5;
}
