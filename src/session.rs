//! Session owner
//!
//! Owns the current game: folds events through the reducer, renders every
//! produced state exactly once and in order, and swaps in a fresh game when
//! the level is cleared or the ship is hit.

use crate::GameError;
use crate::clock::Clock;
use crate::input::{KeyFilter, Transition};
use crate::sim::{Event, State, reduce};
use crate::tuning::Tuning;

/// Consumer of every produced snapshot
pub trait Renderer {
    /// Reflect `state`: move the ship, upsert live bodies, drop `exit` ids,
    /// show the score
    fn render(&mut self, state: &State);
    /// Remove everything before a new session starts
    fn clear(&mut self);
}

/// Outcome of dispatching one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// Every rock destroyed; a new session has started
    Cleared { score: u32 },
    /// Ship hit; a new session has started
    Lost { score: u32 },
}

pub struct Session<R: Renderer> {
    tuning: Tuning,
    seed: u64,
    state: State,
    clock: Clock,
    keys: KeyFilter,
    renderer: R,
    sessions_started: u32,
}

impl<R: Renderer> Session<R> {
    /// Start the first game; rejects tuning the simulation cannot run with
    pub fn new(tuning: Tuning, seed: u64, renderer: R) -> Result<Self, GameError> {
        tuning.validate()?;
        log::info!("Session 1 starting with seed {}", seed);
        Ok(Self {
            state: State::initial(tuning.clone(), seed),
            clock: Clock::new(&tuning),
            keys: KeyFilter::new(tuning.ship_slide_step),
            tuning,
            seed,
            renderer,
            sessions_started: 1,
        })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Reduce one event, render the result, restart if the game ended
    pub fn dispatch(&mut self, event: Event) -> SessionStatus {
        self.state = reduce(self.state.clone(), event);
        self.renderer.render(&self.state);

        if !self.state.is_over() {
            return SessionStatus::Running;
        }

        let score = self.state.score;
        let status = if self.state.game_over {
            log::info!(
                "Ship destroyed after {} ticks with score {}",
                self.clock.ticks(),
                score
            );
            SessionStatus::Lost { score }
        } else {
            log::info!(
                "Level cleared after {} ticks with score {}",
                self.clock.ticks(),
                score
            );
            SessionStatus::Cleared { score }
        };
        self.restart();
        status
    }

    /// Feed a key transition from the input device
    pub fn handle_key(
        &mut self,
        code: &str,
        transition: Transition,
        repeat: bool,
    ) -> Option<SessionStatus> {
        let event = self.keys.translate(code, transition, repeat)?;
        Some(self.dispatch(event))
    }

    /// Advance the clock by `dt` time units and dispatch what fell due.
    ///
    /// Events left in this frame after a restart belonged to the old
    /// session and are dropped with it.
    pub fn advance(&mut self, dt: f64) -> SessionStatus {
        for event in self.clock.advance(dt) {
            let status = self.dispatch(event);
            if status != SessionStatus::Running {
                return status;
            }
        }
        SessionStatus::Running
    }

    fn restart(&mut self) {
        self.renderer.clear();
        self.seed = self.seed.wrapping_add(1);
        self.state = State::initial(self.tuning.clone(), self.seed);
        self.clock = Clock::new(&self.tuning);
        self.keys.reset();
        self.sessions_started += 1;
        log::info!(
            "Session {} starting with seed {}",
            self.sessions_started,
            self.seed
        );
    }
}
