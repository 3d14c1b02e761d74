//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One event in, one new `State` out
//! - Seeded RNG only, carried in the state
//! - Logical tick index as the only clock
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod motion;
pub mod reduce;
pub mod state;
pub mod vector;

pub use body::{Body, Circle, ObjectId, ViewType, start_rocks};
pub use collision::{bodies_collided, handle_collisions};
pub use motion::{move_body, move_body_unwrapped, torus_wrap};
pub use reduce::{Event, move_ship, reduce, rock_shoot, scan_states, shoot, tick};
pub use state::State;
pub use vector::{VecExt, unit_vec_in_direction};
