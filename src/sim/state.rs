//! Game state snapshot
//!
//! One `State` is produced per event. Nothing here is mutated after the
//! reducer hands it out; the next event builds a fresh value.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, start_rocks};
use crate::tuning::Tuning;

/// Complete game snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Logical tick index of the last Tick event
    pub time: u64,
    pub ship: Body,
    /// Ship-fired bullets
    pub bullets: Vec<Body>,
    pub rocks: Vec<Body>,
    /// Rock-fired bullets
    pub rocks_bullet: Vec<Body>,
    /// Bodies removed during this tick; the view drops them, then they are gone
    pub exit: Vec<Body>,
    /// Serial handed to the next spawned body; never decreases
    pub obj_count: u64,
    pub game_over: bool,
    pub score: u32,
    /// Balance values this session runs with
    #[serde(skip)]
    pub tuning: Tuning,
    /// Rock fire target selection
    #[serde(skip, default = "unseeded_rng")]
    pub rng: Pcg32,
}

fn unseeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl State {
    /// Fresh session: ship at bottom-center, full rock formation, nothing else
    pub fn initial(tuning: Tuning, seed: u64) -> Self {
        let rocks = start_rocks(&tuning);
        Self {
            time: 0,
            ship: Body::ship(&tuning),
            bullets: Vec::new(),
            obj_count: rocks.len() as u64,
            rocks,
            rocks_bullet: Vec::new(),
            exit: Vec::new(),
            game_over: false,
            score: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Level cleared: every rock destroyed
    pub fn is_cleared(&self) -> bool {
        self.rocks.is_empty()
    }

    /// Session should be torn down and restarted
    pub fn is_over(&self) -> bool {
        self.game_over || self.is_cleared()
    }

    /// All live bodies except the ship
    pub fn live_bodies(&self) -> impl Iterator<Item = &Body> {
        self.bullets
            .iter()
            .chain(self.rocks.iter())
            .chain(self.rocks_bullet.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = State::initial(Tuning::default(), 1);
        assert_eq!(state.time, 0);
        assert_eq!(state.rocks.len(), 10);
        assert!(state.bullets.is_empty());
        assert!(state.rocks_bullet.is_empty());
        assert!(state.exit.is_empty());
        assert_eq!(state.obj_count, 10);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(!state.is_over());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = State::initial(Tuning::default(), 1);
        let json = serde_json::to_value(&state).expect("serializes");
        assert_eq!(json["rocks"].as_array().map(Vec::len), Some(10));
        assert_eq!(json["ship"]["viewType"], "ship");
        assert_eq!(json["objCount"], 10);
        assert!(json.get("rng").is_none());
    }
}
