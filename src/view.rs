//! In-memory scene kept in sync with snapshots
//!
//! Mirrors what a vector canvas needs: one circle per live body keyed by its
//! id, the ship's translation, and the score line. Useful headless and as
//! the model the DOM adapter follows.

use std::collections::BTreeMap;

use glam::Vec2;

use crate::GameError;
use crate::session::Renderer;
use crate::sim::{Body, State, ViewType};

/// One drawn circle
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub class: ViewType,
    pub center: Vec2,
    pub radius: f32,
}

impl Node {
    fn from_body(body: &Body) -> Self {
        Self {
            id: body.id.clone(),
            class: body.view_type,
            center: body.pos,
            radius: body.radius,
        }
    }
}

/// Text shown above the canvas
pub fn score_text(score: u32) -> String {
    format!("Player score: {} points", score)
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: BTreeMap<String, Node>,
    ship: Vec2,
    score: String,
    frames: u64,
    stale_removals: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or move the node for `body`
    pub fn upsert(&mut self, body: &Body) {
        self.nodes
            .entry(body.id.clone())
            .and_modify(|n| n.center = body.pos)
            .or_insert_with(|| Node::from_body(body));
    }

    /// Remove a node; asking twice for the same id is an error the caller may ignore
    pub fn remove(&mut self, id: &str) -> Result<Node, GameError> {
        self.nodes
            .remove(id)
            .ok_or_else(|| GameError::MissingNode(id.to_string()))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ship(&self) -> Vec2 {
        self.ship
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    /// Snapshots rendered since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Exit ids that had no node left to remove
    pub fn stale_removals(&self) -> u64 {
        self.stale_removals
    }
}

impl Renderer for Scene {
    fn render(&mut self, state: &State) {
        self.frames += 1;
        self.score = score_text(state.score);
        self.ship = state.ship.pos;

        for body in state.live_bodies() {
            self.upsert(body);
        }

        for body in &state.exit {
            if let Err(e) = self.remove(&body.id) {
                // Expired and destroyed in the same tick, or hit by two bullets
                log::warn!("Already removed: {}", e);
                self.stale_removals += 1;
            }
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Event, reduce};
    use crate::tuning::Tuning;

    #[test]
    fn test_render_creates_nodes_per_body() {
        let state = reduce(State::initial(Tuning::default(), 3), Event::Shoot);
        let mut scene = Scene::new();
        scene.render(&state);

        assert_eq!(scene.len(), 11);
        assert_eq!(scene.score(), "Player score: 0 points");
        assert_eq!(scene.ship(), Vec2::new(300.0, 550.0));
        let bullet = scene.node("bullet10").expect("bullet node");
        assert_eq!(bullet.class, ViewType::Bullet);
        assert_eq!(bullet.radius, 4.0);
    }

    #[test]
    fn test_render_moves_existing_nodes() {
        let state = State::initial(Tuning::default(), 3);
        let mut scene = Scene::new();
        scene.render(&state);
        let next = reduce(state, Event::Tick { elapsed: 1 });
        scene.render(&next);

        assert_eq!(scene.len(), 10);
        assert_eq!(scene.node("rock0").map(|n| n.center), Some(next.rocks[0].pos));
        assert_eq!(scene.frames(), 2);
    }

    #[test]
    fn test_double_removal_is_tolerated() {
        let mut state = State::initial(Tuning::default(), 3);
        let mut scene = Scene::new();
        scene.render(&state);

        let rock = state.rocks.remove(0);
        state.exit = vec![rock.clone(), rock];
        scene.render(&state);

        assert!(scene.node("rock0").is_none());
        assert_eq!(scene.stale_removals(), 1);
        assert!(matches!(scene.remove("rock0"), Err(GameError::MissingNode(id)) if id == "rock0"));
    }
}
