//! Fixed-period clock
//!
//! Converts wall-clock frame deltas into the two periodic events the game
//! needs: a `Tick` every `tick_period` and a `RockShoot` every
//! `rock_fire_period`. Tick payloads are the logical tick index.

use crate::sim::Event;
use crate::tuning::Tuning;

/// Longest frame delta accepted in one call (tab switches, debugger pauses)
pub const MAX_FRAME_TIME: f64 = 250.0;

#[derive(Debug, Clone)]
pub struct Clock {
    tick_period: f64,
    rock_fire_period: f64,
    accumulator: f64,
    fire_accumulator: f64,
    ticks: u64,
}

impl Clock {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            tick_period: tuning.tick_period as f64,
            rock_fire_period: tuning.rock_fire_period as f64,
            accumulator: 0.0,
            fire_accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Ticks emitted so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed `dt` time units and collect the events that fell due, in order
    pub fn advance(&mut self, dt: f64) -> Vec<Event> {
        // NaN would poison the accumulator and stop the clock for good
        if dt.is_finite() {
            self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);
        }

        let mut events = Vec::new();
        while self.accumulator >= self.tick_period {
            self.accumulator -= self.tick_period;
            events.push(Event::Tick {
                elapsed: self.ticks,
            });
            self.ticks += 1;

            self.fire_accumulator += self.tick_period;
            if self.fire_accumulator >= self.rock_fire_period {
                self.fire_accumulator -= self.rock_fire_period;
                events.push(Event::RockShoot);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_accumulate() {
        let mut clock = Clock::new(&Tuning::default());
        assert!(clock.advance(9.0).is_empty());
        assert_eq!(clock.advance(1.0), vec![Event::Tick { elapsed: 0 }]);
        assert_eq!(
            clock.advance(25.0),
            vec![Event::Tick { elapsed: 1 }, Event::Tick { elapsed: 2 }]
        );
        assert_eq!(clock.advance(5.0), vec![Event::Tick { elapsed: 3 }]);
        assert_eq!(clock.ticks(), 4);
    }

    #[test]
    fn test_rock_fire_every_hundred_ticks() {
        let mut clock = Clock::new(&Tuning::default());
        let mut events = Vec::new();
        for _ in 0..200 {
            events.extend(clock.advance(10.0));
        }
        let shots: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == Event::RockShoot)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(shots.len(), 2);
        // Fires right after the 100th tick
        assert_eq!(events[shots[0] - 1], Event::Tick { elapsed: 99 });
    }

    #[test]
    fn test_long_frame_clamped() {
        let mut clock = Clock::new(&Tuning::default());
        assert_eq!(clock.advance(10_000.0).len(), 25);
        assert!(clock.advance(-5.0).is_empty());
    }

    #[test]
    fn test_non_finite_frame_ignored() {
        let mut clock = Clock::new(&Tuning::default());
        assert!(clock.advance(f64::NAN).is_empty());
        assert!(clock.advance(f64::INFINITY).is_empty());
        assert_eq!(clock.advance(30.0).len(), 3);
        assert_eq!(clock.ticks(), 3);
    }
}
