//! Collision detection and cleanup
//!
//! Runs once at the end of every tick, after motion. Bullets and rocks that
//! touch are both removed; the ship touching a rock or a rock bullet ends
//! the game.

use super::body::Body;
use super::state::State;

/// Two bodies overlap when their centers are closer than the sum of radii
#[inline]
pub fn bodies_collided(a: &Body, b: &Body) -> bool {
    (a.pos - b.pos).length() < a.radius + b.radius
}

/// `bodies` minus anything whose id appears in `removed`
fn except(bodies: &[Body], removed: &[Body]) -> Vec<Body> {
    bodies
        .iter()
        .filter(|b| !removed.iter().any(|r| r.id == b.id))
        .cloned()
        .collect()
}

/// Resolve every collision in `state`.
///
/// Every colliding (bullet, rock) pair contributes both bodies to `exit`.
/// A rock hit by two bullets appears twice there but is removed once and
/// scores once.
pub fn handle_collisions(state: State) -> State {
    let ship_hit_rock = state
        .rocks
        .iter()
        .any(|r| bodies_collided(&state.ship, r));
    let ship_hit_bullet = state
        .rocks_bullet
        .iter()
        .any(|b| bodies_collided(&state.ship, b));

    let (collided_bullets, collided_rocks): (Vec<Body>, Vec<Body>) = state
        .bullets
        .iter()
        .flat_map(|b| state.rocks.iter().map(move |r| (b, r)))
        .filter(|(b, r)| bodies_collided(b, r))
        .map(|(b, r)| (b.clone(), r.clone()))
        .unzip();

    let bullets = except(&state.bullets, &collided_bullets);
    let rocks = except(&state.rocks, &collided_rocks);
    let destroyed = (state.rocks.len() - rocks.len()) as u32;

    if destroyed > 0 {
        log::debug!(
            "Tick {}: {} rock(s) destroyed by {} hit(s)",
            state.time,
            destroyed,
            collided_bullets.len()
        );
    }

    let mut exit = state.exit;
    exit.extend(collided_bullets);
    exit.extend(collided_rocks);

    State {
        score: state.score + destroyed * state.tuning.score_per_rock,
        game_over: ship_hit_rock || ship_hit_bullet,
        bullets,
        rocks,
        exit,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::{Circle, ObjectId};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn oid(serial: u64) -> ObjectId {
        ObjectId {
            serial,
            create_time: 0,
        }
    }

    fn rock(serial: u64, x: f32, y: f32) -> Body {
        Body::rock(
            oid(serial),
            Circle {
                pos: Vec2::new(x, y),
                radius: 20.0,
            },
            Vec2::ZERO,
        )
    }

    fn bullet(serial: u64, x: f32, y: f32) -> Body {
        Body::bullet(
            oid(serial),
            Circle {
                pos: Vec2::new(x, y),
                radius: 4.0,
            },
            Vec2::ZERO,
        )
    }

    fn empty_state() -> State {
        let mut state = State::initial(Tuning::default(), 0);
        state.rocks.clear();
        state
    }

    #[test]
    fn test_touching_is_not_colliding() {
        let a = rock(0, 0.0, 0.0);
        let b = bullet(1, 24.0, 0.0);
        assert!(!bodies_collided(&a, &b));
        let c = bullet(2, 23.9, 0.0);
        assert!(bodies_collided(&a, &c));
    }

    #[test]
    fn test_bullet_destroys_every_overlapping_rock() {
        let mut state = empty_state();
        state.rocks = vec![rock(0, 100.0, 100.0), rock(1, 130.0, 100.0), rock(2, 400.0, 100.0)];
        state.bullets = vec![bullet(10, 115.0, 100.0)];

        let next = handle_collisions(state);
        assert_eq!(next.rocks.len(), 1);
        assert_eq!(next.rocks[0].id, "rock2");
        assert!(next.bullets.is_empty());
        assert_eq!(next.score, 10);
        assert_eq!(next.exit.len(), 4); // bullet listed once per pair
    }

    #[test]
    fn test_rock_hit_twice_scores_once() {
        let mut state = empty_state();
        state.rocks = vec![rock(0, 100.0, 100.0), rock(1, 400.0, 400.0)];
        state.bullets = vec![bullet(10, 95.0, 100.0), bullet(11, 105.0, 100.0)];

        let next = handle_collisions(state);
        assert_eq!(next.rocks.len(), 1);
        assert!(next.bullets.is_empty());
        assert_eq!(next.score, 5);
        assert_eq!(next.exit.iter().filter(|b| b.id == "rock0").count(), 2);
    }

    #[test]
    fn test_ship_hits() {
        let mut state = empty_state();
        state.rocks = vec![rock(0, 500.0, 100.0)];
        assert!(!handle_collisions(state.clone()).game_over);

        let mut by_rock = state.clone();
        by_rock.rocks.push(rock(1, 310.0, 540.0));
        assert!(handle_collisions(by_rock).game_over);

        let mut by_bullet = state;
        by_bullet.rocks_bullet.push(Body::rock_bullet(
            oid(20),
            Circle {
                pos: Vec2::new(300.0, 530.0),
                radius: 4.0,
            },
            Vec2::new(0.0, 10.0),
        ));
        assert!(handle_collisions(by_bullet).game_over);
    }

    #[test]
    fn test_keeps_expired_in_exit() {
        let mut state = empty_state();
        state.rocks = vec![rock(0, 100.0, 100.0)];
        state.exit = vec![bullet(3, 0.0, 0.0)];
        state.bullets = vec![bullet(4, 100.0, 100.0)];

        let next = handle_collisions(state);
        let ids: Vec<&str> = next.exit.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bullet3", "bullet4", "rock0"]);
    }

    proptest! {
        #[test]
        fn collision_is_symmetric(
            ax in -700.0f32..700.0, ay in -700.0f32..700.0, ar in 0.0f32..50.0,
            bx in -700.0f32..700.0, by in -700.0f32..700.0, br in 0.0f32..50.0,
        ) {
            let mut a = rock(0, ax, ay);
            a.radius = ar;
            let mut b = bullet(1, bx, by);
            b.radius = br;
            prop_assert_eq!(bodies_collided(&a, &b), bodies_collided(&b, &a));
        }
    }
}
