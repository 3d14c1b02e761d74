//! Event reducer
//!
//! The game is a left fold of `reduce` over one ordered stream of events.
//! Spawning events only touch their collection; collisions are resolved by
//! the next `Tick`.

use rand::Rng;

use super::body::{Body, Circle, ObjectId};
use super::collision::handle_collisions;
use super::motion::{move_body, move_body_unwrapped};
use super::state::State;
use super::vector::unit_vec_in_direction;

/// Everything that can happen to a running game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Clock tick carrying the logical tick index
    Tick { elapsed: u64 },
    /// Set the ship's horizontal slide (0 stops it)
    MoveShip { direction: f32 },
    /// Ship fires one bullet
    Shoot,
    /// A random rock fires one bullet downward
    RockShoot,
}

/// Produce the next state for `event`
pub fn reduce(state: State, event: Event) -> State {
    match event {
        Event::MoveShip { direction } => move_ship(state, direction),
        Event::Shoot => shoot(state),
        Event::RockShoot => rock_shoot(state),
        Event::Tick { elapsed } => tick(state, elapsed),
    }
}

/// Every intermediate state of folding `events` over `initial`
pub fn scan_states<I>(initial: State, events: I) -> impl Iterator<Item = State>
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().scan(initial, |state, event| {
        let next = reduce(state.clone(), event);
        *state = next.clone();
        Some(next)
    })
}

pub fn move_ship(state: State, direction: f32) -> State {
    State {
        ship: Body {
            torque: direction,
            ..state.ship
        },
        ..state
    }
}

/// Append a bullet at the ship, moving in the ship's facing
pub fn shoot(state: State) -> State {
    let muzzle = unit_vec_in_direction(state.ship.angle) * state.tuning.bullet_speed;
    let bullet = Body::bullet(
        ObjectId {
            serial: state.obj_count,
            create_time: state.time,
        },
        Circle {
            pos: state.ship.pos,
            radius: state.tuning.bullet_radius,
        },
        state.ship.vel + muzzle,
    );
    log::debug!("Tick {}: ship fires {}", state.time, bullet.id);

    let mut bullets = state.bullets;
    bullets.push(bullet);
    State {
        bullets,
        obj_count: state.obj_count + 1,
        ..state
    }
}

/// Pick a live rock uniformly and drop a bullet from it
///
/// With no rocks left nothing is spawned and the counter is untouched.
pub fn rock_shoot(state: State) -> State {
    if state.rocks.is_empty() {
        return state;
    }

    let mut rng = state.rng.clone();
    let shooter = &state.rocks[rng.random_range(0..state.rocks.len())];
    let bullet = Body::rock_bullet(
        ObjectId {
            serial: state.obj_count,
            create_time: state.time,
        },
        Circle {
            pos: shooter.pos,
            radius: state.tuning.bullet_radius,
        },
        state.tuning.rock_bullet_velocity,
    );
    log::debug!("Tick {}: {} fires {}", state.time, shooter.id, bullet.id);

    let mut rocks_bullet = state.rocks_bullet;
    rocks_bullet.push(bullet);
    State {
        rocks_bullet,
        obj_count: state.obj_count + 1,
        rng,
        ..state
    }
}

/// Advance one tick: expire old bullets, move everything, resolve collisions
pub fn tick(state: State, elapsed: u64) -> State {
    let canvas = state.tuning.canvas_size;
    let bullet_lifetime = state.tuning.bullet_lifetime;
    let rock_bullet_lifetime = state.tuning.rock_bullet_lifetime;

    let (expired_bullets, active_bullets): (Vec<Body>, Vec<Body>) = state
        .bullets
        .into_iter()
        .partition(|b| b.age(elapsed) > bullet_lifetime);
    let (expired_rock_bullets, active_rock_bullets): (Vec<Body>, Vec<Body>) = state
        .rocks_bullet
        .into_iter()
        .partition(|b| b.age(elapsed) > rock_bullet_lifetime);

    let mut exit = expired_bullets;
    exit.extend(expired_rock_bullets);

    handle_collisions(State {
        time: elapsed,
        ship: move_body(&state.ship, canvas),
        bullets: active_bullets.iter().map(|b| move_body(b, canvas)).collect(),
        rocks: state.rocks.iter().map(|r| move_body(r, canvas)).collect(),
        rocks_bullet: active_rock_bullets.iter().map(move_body_unwrapped).collect(),
        exit,
        ..state
    })
}
