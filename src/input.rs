//! Keyboard input to simulation events
//!
//! The simulation assumes one event per physical key transition, so
//! auto-repeat and unknown keys are dropped here.

use std::collections::HashSet;

use crate::sim::Event;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Down,
    Up,
}

/// Turns raw key transitions into at most one event each
#[derive(Debug, Clone)]
pub struct KeyFilter {
    slide_step: f32,
    held: HashSet<Key>,
}

impl KeyFilter {
    pub fn new(slide_step: f32) -> Self {
        Self {
            slide_step,
            held: HashSet::new(),
        }
    }

    /// Translate one key transition; `repeat` is the browser's auto-repeat flag
    pub fn translate(&mut self, code: &str, transition: Transition, repeat: bool) -> Option<Event> {
        if repeat {
            return None;
        }
        let key = Key::from_code(code)?;

        match transition {
            Transition::Down => {
                // Some platforms repeat keydown without setting the flag
                if !self.held.insert(key) {
                    return None;
                }
                Some(match key {
                    Key::Left => Event::MoveShip {
                        direction: -self.slide_step,
                    },
                    Key::Right => Event::MoveShip {
                        direction: self.slide_step,
                    },
                    Key::Fire => Event::Shoot,
                })
            }
            Transition::Up => {
                self.held.remove(&key);
                match key {
                    Key::Left | Key::Right => Some(Event::MoveShip { direction: 0.0 }),
                    Key::Fire => None,
                }
            }
        }
    }

    /// Forget held keys (new session)
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let mut filter = KeyFilter::new(4.0);
        assert_eq!(
            filter.translate("ArrowLeft", Transition::Down, false),
            Some(Event::MoveShip { direction: -4.0 })
        );
        assert_eq!(
            filter.translate("ArrowLeft", Transition::Up, false),
            Some(Event::MoveShip { direction: 0.0 })
        );
        assert_eq!(
            filter.translate("ArrowRight", Transition::Down, false),
            Some(Event::MoveShip { direction: 4.0 })
        );
        assert_eq!(
            filter.translate("ArrowRight", Transition::Up, false),
            Some(Event::MoveShip { direction: 0.0 })
        );
    }

    #[test]
    fn test_fire_once_per_press() {
        let mut filter = KeyFilter::new(4.0);
        assert_eq!(filter.translate("Space", Transition::Down, false), Some(Event::Shoot));
        assert_eq!(filter.translate("Space", Transition::Down, true), None);
        assert_eq!(filter.translate("Space", Transition::Down, false), None);
        assert_eq!(filter.translate("Space", Transition::Up, false), None);
        assert_eq!(filter.translate("Space", Transition::Down, false), Some(Event::Shoot));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut filter = KeyFilter::new(4.0);
        assert_eq!(filter.translate("KeyA", Transition::Down, false), None);
        assert_eq!(filter.translate("ArrowUp", Transition::Down, false), None);
    }

    #[test]
    fn test_reset_releases_keys() {
        let mut filter = KeyFilter::new(4.0);
        assert!(filter.translate("Space", Transition::Down, false).is_some());
        filter.reset();
        assert!(filter.translate("Space", Transition::Down, false).is_some());
    }
}
