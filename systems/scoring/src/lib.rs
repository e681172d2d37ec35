#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Score counter and the stepped difficulty ramp.
//!
//! The score advances by one per running tick. Each time it crosses a
//! multiple of the step threshold the tick interval shrinks by a fixed
//! amount, floored so the game never accelerates past its fastest pace.

use std::time::Duration;

/// Configuration parameters required to construct the progression tracker.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    initial_tick: Duration,
    floor_tick: Duration,
    tick_step: Duration,
    step_threshold: u16,
}

impl Config {
    /// Creates a new configuration from the initial interval, the floor, the
    /// per-step shrink amount and the score multiple that triggers a step.
    #[must_use]
    pub const fn new(
        initial_tick: Duration,
        floor_tick: Duration,
        tick_step: Duration,
        step_threshold: u16,
    ) -> Self {
        Self {
            initial_tick,
            floor_tick,
            tick_step,
            step_threshold,
        }
    }
}

/// Outcome of advancing the progression by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Score after the increment.
    pub score: u16,
    /// New tick interval when this tick crossed a step threshold.
    pub speed_increase: Option<Duration>,
}

/// Tracks the score and the current tick interval for one running session.
#[derive(Debug)]
pub struct Progression {
    score: u16,
    tick_interval: Duration,
    config: Config,
}

impl Progression {
    /// Creates a fresh progression at score zero and the initial interval.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            score: 0,
            tick_interval: config.initial_tick,
            config,
        }
    }

    /// Advances the score by one and applies the difficulty step when the
    /// new score is an exact positive multiple of the threshold.
    pub fn advance(&mut self) -> Advance {
        self.score = self.score.saturating_add(1);

        let crossed_threshold = self.config.step_threshold > 0
            && self.score % self.config.step_threshold == 0;
        let speed_increase = if crossed_threshold && self.tick_interval > self.config.floor_tick {
            self.tick_interval = self
                .tick_interval
                .saturating_sub(self.config.tick_step)
                .max(self.config.floor_tick);
            Some(self.tick_interval)
        } else {
            None
        };

        Advance {
            score: self.score,
            speed_increase,
        }
    }

    /// Score accumulated so far in the current run.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Interval the adapter should wait before driving the next tick.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Returns the progression to score zero and the initial interval.
    pub fn reset(&mut self) {
        self.score = 0;
        self.tick_interval = self.config.initial_tick;
    }
}
